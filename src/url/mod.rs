//! URL handling module for Page-Lexicon
//!
//! This module provides entry URL normalization, the page identity used for
//! deduplication, and the same-origin and asset checks applied to links.

mod normalize;
mod origin;

// Re-export main functions
pub use normalize::{dedup_key, normalize_url, parse_page_url};
pub use origin::{is_asset_path, is_same_origin};
