//! Typed crawl options with their numeric bounds

use crate::config::types::{Config, LinkDiscovery, UserAgentConfig};
use std::time::Duration;

/// Upper bound for the page budget of one crawl
pub const MAX_PAGES_LIMIT: usize = 30;

/// Upper bound for the number of fetches in flight at once
pub const MAX_CONCURRENCY_LIMIT: usize = 6;

/// Options for a single crawl
///
/// The page budget and batch width are clamped when the options are built, so
/// the crawl loop never sees an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    follow_links: bool,
    max_pages: usize,
    max_concurrent_fetches: usize,
    per_request_timeout: Duration,
    link_discovery: LinkDiscovery,
    headers: UserAgentConfig,
}

impl CrawlOptions {
    /// Creates options, clamping `max_pages` to 1..=30 and
    /// `max_concurrent_fetches` to 1..=6
    ///
    /// # Example
    ///
    /// ```
    /// use page_lexicon::CrawlOptions;
    /// use std::time::Duration;
    ///
    /// let options = CrawlOptions::new(true, 100, 0, Duration::from_secs(5));
    /// assert_eq!(options.max_pages(), 30);
    /// assert_eq!(options.max_concurrent_fetches(), 1);
    /// ```
    pub fn new(
        follow_links: bool,
        max_pages: usize,
        max_concurrent_fetches: usize,
        per_request_timeout: Duration,
    ) -> Self {
        Self {
            follow_links,
            max_pages: clamp_setting("max_pages", max_pages, 1, MAX_PAGES_LIMIT),
            max_concurrent_fetches: clamp_setting(
                "max_concurrent_fetches",
                max_concurrent_fetches,
                1,
                MAX_CONCURRENCY_LIMIT,
            ),
            per_request_timeout,
            link_discovery: LinkDiscovery::default(),
            headers: UserAgentConfig::default(),
        }
    }

    /// Sets where link discovery takes its markup from
    pub fn with_link_discovery(mut self, link_discovery: LinkDiscovery) -> Self {
        self.link_discovery = link_discovery;
        self
    }

    /// Sets the request headers used for every fetch
    pub fn with_headers(mut self, headers: UserAgentConfig) -> Self {
        self.headers = headers;
        self
    }

    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    pub fn per_request_timeout(&self) -> Duration {
        self.per_request_timeout
    }

    pub fn link_discovery(&self) -> LinkDiscovery {
        self.link_discovery
    }

    pub fn headers(&self) -> &UserAgentConfig {
        &self.headers
    }
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self::new(false, 5, 4, Duration::from_millis(10_000))
    }
}

impl From<&Config> for CrawlOptions {
    fn from(config: &Config) -> Self {
        let crawler = &config.crawler;
        Self::new(
            crawler.follow_links,
            crawler.max_pages,
            crawler.max_concurrent_fetches,
            Duration::from_millis(crawler.timeout_ms),
        )
        .with_link_discovery(crawler.link_discovery)
        .with_headers(config.user_agent.clone())
    }
}

fn clamp_setting(name: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!("{} = {} is out of range, using {}", name, value, clamped);
    }
    clamped
}
