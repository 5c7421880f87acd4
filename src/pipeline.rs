//! Crawl-and-analyze pipeline
//!
//! Composes the crawler and the analyzer for one run:
//! - Rejects empty or oversized entry lists
//! - Crawls with options taken from the configuration
//! - Feeds the usable page texts to the analyzer
//! - Assembles the [`ScrapeReport`]

use crate::analysis::{Analyzer, StopwordSet};
use crate::config::{AnalysisConfig, Config, CrawlOptions};
use crate::crawler::{CrawlResult, Crawler};
use crate::output::{describe_failures, ScrapeReport};
use crate::{ConfigError, LexiconError};
use std::path::Path;

/// Runs one crawl and ranks the words of every usable page
///
/// Blank entries are dropped before the `max_entry_urls` limit is checked,
/// so they never count against it. Partial failures end up in
/// [`ScrapeReport::errors`]; only a run where no page produced text fails.
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - At least one page was usable
/// * `Err(LexiconError)` - Bad entry list, unreadable stopword file, client
///   construction failure, or no usable content
pub async fn run<S: AsRef<str>>(entry_urls: &[S], config: &Config) -> Result<ScrapeReport, LexiconError> {
    let entries = prepare_entries(entry_urls, config.crawler.max_entry_urls)?;
    let analyzer = build_analyzer(&config.analysis)?;

    let crawler = Crawler::new(CrawlOptions::from(config))?;
    let crawl = crawler.crawl(&entries).await?;

    summarize(
        &crawl,
        &analyzer,
        config.analysis.top_n,
        config.analysis.min_frequency,
    )
}

/// Drops blank entries and enforces the entry-count limit
pub fn prepare_entries<S: AsRef<str>>(
    entry_urls: &[S],
    max_entry_urls: usize,
) -> Result<Vec<String>, LexiconError> {
    let entries: Vec<String> = entry_urls
        .iter()
        .map(|url| url.as_ref().trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(LexiconError::NoEntryUrls);
    }
    if entries.len() > max_entry_urls {
        return Err(LexiconError::TooManyEntryUrls {
            count: entries.len(),
            max: max_entry_urls,
        });
    }

    Ok(entries)
}

/// Builds an analyzer from the built-in stopwords plus configured extras
pub fn build_analyzer(config: &AnalysisConfig) -> Result<Analyzer, LexiconError> {
    let mut stopwords = StopwordSet::builtin();

    if let Some(path) = &config.stopwords_path {
        let extra = StopwordSet::load(Path::new(path)).map_err(ConfigError::Io)?;
        tracing::debug!("Loaded {} stopword(s) from {}", extra.len(), path);
        stopwords.extend(extra.iter());
    }
    stopwords.extend(&config.extra_stopwords);

    Ok(Analyzer::new(stopwords))
}

/// Turns a finished crawl into a report
///
/// Fails with [`LexiconError::NoUsableContent`] when no outcome is usable.
pub fn summarize(
    crawl: &CrawlResult,
    analyzer: &Analyzer,
    top_n: usize,
    min_frequency: usize,
) -> Result<ScrapeReport, LexiconError> {
    let texts: Vec<&str> = crawl.usable().map(|outcome| outcome.text.as_str()).collect();

    if texts.is_empty() {
        let errors = describe_failures(crawl);
        tracing::error!("No usable content in {} outcome(s)", crawl.outcomes.len());
        return Err(LexiconError::NoUsableContent { errors });
    }

    let words = analyzer.analyze(&texts, top_n, min_frequency);
    let report = ScrapeReport::new(words, crawl);

    tracing::info!(
        "Analyzed {} page(s): {} distinct word(s) reported, {} error(s)",
        report.processed_urls,
        report.word_frequencies.len(),
        report.errors.len()
    );

    Ok(report)
}
