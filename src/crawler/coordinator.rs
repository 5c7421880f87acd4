//! Crawler coordinator - bounded breadth-first crawl
//!
//! This module contains the crawl loop, which:
//! - Seeds the frontier with normalized entry URLs
//! - Fetches the frontier in concurrent batches
//! - Harvests same-origin links from usable pages when asked to
//! - Stops once the page budget is spent or the frontier is empty

use crate::config::{CrawlOptions, LinkDiscovery};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::frontier::{Enqueue, Frontier};
use crate::crawler::outcome::{CrawlResult, FetchOutcome};
use crate::crawler::parser::{extract_links_from_markup, extract_page_text, LinkExtraction};
use crate::url::normalize_url;
use crate::LexiconError;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::Client;
use std::time::Instant;

/// A fetched page, with its markup kept when link discovery will reuse it
#[derive(Debug)]
struct FetchedPage {
    outcome: FetchOutcome,
    markup: Option<String>,
}

/// Crawler holding one HTTP client and one set of options
///
/// Each call to [`Crawler::crawl`] starts from an empty frontier, so a crawler
/// can be reused for independent crawls.
pub struct Crawler {
    client: Client,
    options: CrawlOptions,
}

impl Crawler {
    /// Creates a new crawler
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(LexiconError)` - The HTTP client could not be built
    pub fn new(options: CrawlOptions) -> Result<Self, LexiconError> {
        let client = build_http_client()?;
        Ok(Self { client, options })
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// Runs one bounded breadth-first crawl
    ///
    /// Per-page failures are recorded in the outcomes; the only error is an
    /// empty entry list.
    ///
    /// # Loop
    ///
    /// While the queue is non-empty and fewer than `max_pages` outcomes exist:
    /// 1. Take a batch of at most `max_concurrent_fetches` URLs
    /// 2. Fetch the batch concurrently, appending outcomes as they complete
    /// 3. With `follow_links`, harvest links from each usable page of the batch
    ///    and enqueue unseen ones while the seen-set is below `max_pages`
    ///
    /// A batch never exceeds the remaining page budget, so when more URLs are
    /// queued than the budget allows, the earliest queued ones are fetched
    /// and the rest are never requested.
    pub async fn crawl<S: AsRef<str>>(&self, entry_urls: &[S]) -> Result<CrawlResult, LexiconError> {
        if entry_urls.is_empty() {
            return Err(LexiconError::NoEntryUrls);
        }

        let max_pages = self.options.max_pages();
        let mut frontier = Frontier::new(
            entry_urls.iter().map(|url| normalize_url(url.as_ref())),
            max_pages,
        );
        let mut outcomes: Vec<FetchOutcome> = Vec::new();
        let start_time = Instant::now();

        tracing::info!(
            "Starting crawl of {} entry URL(s): follow_links={}, max_pages={}, concurrency={}",
            frontier.queued(),
            self.options.follow_links(),
            max_pages,
            self.options.max_concurrent_fetches()
        );

        while !frontier.is_empty() && outcomes.len() < max_pages {
            // Never fetch more pages than the remaining budget can keep
            let width = self
                .options
                .max_concurrent_fetches()
                .min(max_pages - outcomes.len());
            let batch = frontier.next_batch(width);

            tracing::debug!(
                "Fetching batch of {} URL(s), {} left in queue",
                batch.len(),
                frontier.queued()
            );

            let pages = self.fetch_batch(batch).await;
            outcomes.extend(pages.iter().map(|page| page.outcome.clone()));

            if !self.options.follow_links() {
                continue;
            }

            for page in &pages {
                if outcomes.len() >= max_pages {
                    break;
                }
                if !page.outcome.is_usable() {
                    continue;
                }

                let links = match self.discover_links(page).await {
                    LinkExtraction::Extracted(links) => links,
                    LinkExtraction::Failed => {
                        tracing::debug!("Link discovery failed for {}", page.outcome.url);
                        continue;
                    }
                };

                let mut added = 0;
                for link in &links {
                    match frontier.offer(link) {
                        Enqueue::Added => added += 1,
                        Enqueue::AlreadySeen => {}
                        Enqueue::BudgetFull => break,
                    }
                }

                tracing::debug!(
                    "{}: {} link(s) found, {} enqueued",
                    page.outcome.url,
                    links.len(),
                    added
                );
            }
        }

        outcomes.truncate(max_pages);
        let result = CrawlResult {
            discovered_count: frontier.discovered_count(),
            outcomes,
        };

        tracing::info!(
            "Crawl completed: {} page(s) fetched ({} usable), {} URL(s) discovered in {:?}",
            result.outcomes.len(),
            result.usable().count(),
            result.discovered_count,
            start_time.elapsed()
        );

        Ok(result)
    }

    /// Fetches every URL of a batch concurrently, in completion order
    async fn fetch_batch(&self, batch: Vec<String>) -> Vec<FetchedPage> {
        let mut in_flight: FuturesUnordered<_> = batch
            .into_iter()
            .map(|url| self.fetch_page(url))
            .collect();

        let mut pages = Vec::with_capacity(in_flight.len());
        while let Some(page) = in_flight.next().await {
            pages.push(page);
        }
        pages
    }

    /// Fetches one page and reduces it to text
    async fn fetch_page(&self, url: String) -> FetchedPage {
        let result = fetch_url(
            &self.client,
            &url,
            self.options.headers(),
            self.options.per_request_timeout(),
        )
        .await;

        match result {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!("Fetched {} (HTTP {}, final URL {})", url, status_code, final_url);
                let text = extract_page_text(&body);
                let keep_markup = self.options.follow_links()
                    && self.options.link_discovery() == LinkDiscovery::Cached;

                FetchedPage {
                    outcome: FetchOutcome::success(url, text),
                    markup: keep_markup.then_some(body),
                }
            }
            failure => {
                let error = failure
                    .failure_message()
                    .unwrap_or_else(|| "fetch failed".to_string());
                tracing::warn!("Failed to fetch {}: {}", url, error);

                FetchedPage {
                    outcome: FetchOutcome::failure(url, error),
                    markup: None,
                }
            }
        }
    }

    /// Harvests links from a usable page
    ///
    /// With [`LinkDiscovery::Refetch`] the page is requested again and a failed
    /// request is an extraction failure; the page's outcome is left untouched.
    async fn discover_links(&self, page: &FetchedPage) -> LinkExtraction {
        let url = &page.outcome.url;

        if let Some(markup) = &page.markup {
            return extract_links_from_markup(markup, url);
        }

        match fetch_url(
            &self.client,
            url,
            self.options.headers(),
            self.options.per_request_timeout(),
        )
        .await
        {
            FetchResult::Success { body, .. } => extract_links_from_markup(&body, url),
            failure => {
                tracing::debug!(
                    "Link discovery fetch failed for {}: {}",
                    url,
                    failure.failure_message().unwrap_or_default()
                );
                LinkExtraction::Failed
            }
        }
    }
}

/// Runs one crawl with a fresh crawler
///
/// # Arguments
///
/// * `entry_urls` - Bare (`example.com`) or scheme-qualified entry URLs
/// * `options` - The crawl options
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Outcomes and discovered URL count
/// * `Err(LexiconError)` - No entry URLs, or the HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// use page_lexicon::crawler::crawl;
/// use page_lexicon::CrawlOptions;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let result = crawl(&["example.com"], &CrawlOptions::default()).await?;
/// for outcome in &result.outcomes {
///     println!("{}: usable={}", outcome.url, outcome.is_usable());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl<S: AsRef<str>>(
    entry_urls: &[S],
    options: &CrawlOptions,
) -> Result<CrawlResult, LexiconError> {
    Crawler::new(options.clone())?.crawl(entry_urls).await
}
