//! Crawler module for bounded page fetching
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching with per-request timeouts
//! - Reducing HTML to readable text and extracting same-origin links
//! - The crawl frontier (queue and seen-set)
//! - The breadth-first crawl loop

mod coordinator;
mod fetcher;
mod frontier;
mod outcome;
mod parser;

pub use coordinator::{crawl, Crawler};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::{Enqueue, Frontier};
pub use outcome::{CrawlResult, FetchOutcome};
pub use parser::{
    extract_links_from_markup, extract_page_text, extract_same_origin_links, LinkExtraction,
};
