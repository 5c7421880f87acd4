//! Output module for analysis reports
//!
//! This module handles:
//! - Assembling the report of one pipeline run
//! - Rendering it as JSON, a plain-text table, or Markdown
//! - Writing rendered reports to disk

mod markdown;
mod table;

pub use markdown::format_markdown_report;
pub use table::format_table_report;

use crate::analysis::WordFrequency;
use crate::crawler::{CrawlResult, FetchOutcome};
use crate::LexiconError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reason given for an outcome that has neither text nor an error
const NO_CONTENT: &str = "no content retrieved";

/// Result of one crawl-and-analyze run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
    /// Ranked words, highest count first
    pub word_frequencies: Vec<WordFrequency>,

    /// Sum of the counts in `word_frequencies`
    pub total_words: usize,

    /// Number of pages that contributed text
    pub processed_urls: usize,

    /// Number of distinct URLs enqueued during the crawl
    pub discovered_urls: usize,

    /// One `"{url}: {reason}"` line per page without usable text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
}

impl ScrapeReport {
    /// Builds a report from a crawl and the words ranked from its usable pages
    pub fn new(word_frequencies: Vec<WordFrequency>, crawl: &CrawlResult) -> Self {
        let total_words = word_frequencies.iter().map(|word| word.value).sum();

        Self {
            word_frequencies,
            total_words,
            processed_urls: crawl.usable().count(),
            discovered_urls: crawl.discovered_count,
            errors: describe_failures(crawl),
            generated_at: Utc::now(),
        }
    }

    /// Renders the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Formats one line per unusable outcome
///
/// # Example
///
/// ```
/// use page_lexicon::crawler::{CrawlResult, FetchOutcome};
/// use page_lexicon::output::describe_failures;
///
/// let crawl = CrawlResult {
///     outcomes: vec![
///         FetchOutcome::success("https://a.com", "text"),
///         FetchOutcome::failure("https://b.com", "HTTP 404 Not Found"),
///     ],
///     discovered_count: 2,
/// };
/// assert_eq!(describe_failures(&crawl), vec!["https://b.com: HTTP 404 Not Found"]);
/// ```
pub fn describe_failures(crawl: &CrawlResult) -> Vec<String> {
    crawl.unusable().map(describe_failure).collect()
}

fn describe_failure(outcome: &FetchOutcome) -> String {
    format!(
        "{}: {}",
        outcome.url,
        outcome.error.as_deref().unwrap_or(NO_CONTENT)
    )
}

/// Writes a rendered report to a file
pub fn write_report(content: &str, output_path: &Path) -> Result<(), LexiconError> {
    std::fs::write(output_path, content)?;
    Ok(())
}
