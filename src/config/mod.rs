//! Configuration module for Page-Lexicon
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and turns the crawler section into clamped [`CrawlOptions`].
//!
//! # Example
//!
//! ```no_run
//! use page_lexicon::config::{load_config, CrawlOptions};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("lexicon.toml")).unwrap();
//! let options = CrawlOptions::from(&config);
//! println!("Crawler will fetch at most {} pages", options.max_pages());
//! ```

mod options;
mod parser;
mod types;
mod validation;

// Re-export types
pub use options::{CrawlOptions, MAX_CONCURRENCY_LIMIT, MAX_PAGES_LIMIT};
pub use types::{
    AnalysisConfig, Config, CrawlerConfig, LinkDiscovery, UserAgentConfig, DEFAULT_ACCEPT,
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
