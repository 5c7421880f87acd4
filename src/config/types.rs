use serde::{Deserialize, Serialize};

/// Browser-like identity sent with every request; some sites refuse bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,zh-CN;q=0.8,zh;q=0.7";

/// Main configuration structure for Page-Lexicon
///
/// Every section and key is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub analysis: AnalysisConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Follow same-origin links found on fetched pages
    pub follow_links: bool,

    /// Page budget for one crawl (clamped to 1..=30)
    pub max_pages: usize,

    /// Width of one fetch batch (clamped to 1..=6)
    pub max_concurrent_fetches: usize,

    /// Timeout applied to each individual request (milliseconds)
    pub timeout_ms: u64,

    /// Maximum number of entry URLs accepted by one pipeline run
    pub max_entry_urls: usize,

    /// Where link harvesting gets its markup from
    pub link_discovery: LinkDiscovery,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_pages: 5,
            max_concurrent_fetches: 4,
            timeout_ms: 10_000,
            max_entry_urls: 10,
            link_discovery: LinkDiscovery::default(),
        }
    }
}

/// Source of the markup used for same-origin link discovery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDiscovery {
    /// Reuse the markup from the page's text fetch
    #[default]
    Cached,
    /// Issue a second request against the page URL
    Refetch,
}

/// Request header configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Value of the `Accept` header
    pub accept: String,

    /// Value of the `Accept-Language` header
    pub accept_language: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Word frequency analysis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalysisConfig {
    /// Number of entries kept after ranking
    pub top_n: usize,

    /// Minimum occurrence count for a word to be reported (0 disables the floor)
    pub min_frequency: usize,

    /// Optional stopword file added to the built-in lists
    pub stopwords_path: Option<String>,

    /// Additional stopwords listed inline
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 100,
            min_frequency: 2,
            stopwords_path: None,
            extra_stopwords: Vec::new(),
        }
    }
}
