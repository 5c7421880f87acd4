//! Page-Lexicon: word frequencies across a bounded web crawl
//!
//! This crate fetches one or more web pages, optionally follows same-origin
//! links up to a page budget, and ranks the significant words found across all
//! fetched text for display as a word cloud.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod output;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Lexicon operations
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("At least one entry URL is required")]
    NoEntryUrls,

    #[error("Too many entry URLs: {count} given, at most {max} allowed")]
    TooManyEntryUrls { count: usize, max: usize },

    #[error("No content could be retrieved from any URL ({} failed)", errors.len())]
    NoUsableContent { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for Page-Lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analysis::{analyze, Analyzer, StopwordSet, WordFrequency};
pub use config::{Config, CrawlOptions, LinkDiscovery};
pub use crawler::{crawl, CrawlResult, Crawler, FetchOutcome};
pub use output::ScrapeReport;
pub use crate::url::normalize_url;
