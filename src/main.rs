//! Page-Lexicon main entry point
//!
//! This is the command-line interface for the Page-Lexicon word frequency tool.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use page_lexicon::config::{load_config, validate, Config, CrawlOptions, LinkDiscovery};
use page_lexicon::output::{format_markdown_report, format_table_report, write_report};
use page_lexicon::pipeline;
use page_lexicon::{normalize_url, ScrapeReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Lexicon: word frequencies across web pages
///
/// Page-Lexicon fetches the given pages, optionally follows same-origin links
/// up to a page budget, and ranks the significant words found across all
/// fetched text.
#[derive(Parser, Debug)]
#[command(name = "page-lexicon")]
#[command(version = "1.0.0")]
#[command(about = "Word frequencies across a bounded web crawl", long_about = None)]
struct Cli {
    /// Entry URLs; a missing scheme defaults to https://
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Follow same-origin links found on fetched pages
    #[arg(long)]
    follow_links: bool,

    /// Page budget for the crawl (1-30)
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Number of pages fetched at once (1-6)
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Timeout for each request in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Request each page again for link discovery instead of reusing its markup
    #[arg(long)]
    refetch_for_links: bool,

    /// Number of words to report
    #[arg(long, value_name = "N")]
    top_n: Option<usize>,

    /// Minimum count for a word to be reported (0 reports everything)
    #[arg(long, value_name = "N")]
    min_frequency: Option<usize>,

    /// Extra stopword file, one word per line
    #[arg(long, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config, &cli.urls);
        return Ok(());
    }

    let report = match pipeline::run(&cli.urls, &config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            if let page_lexicon::LexiconError::NoUsableContent { errors } = &e {
                for error in errors {
                    eprintln!("  - {}", error);
                }
            }
            return Err(e.into());
        }
    };

    let rendered = render(&report, cli.format)?;
    match &cli.output {
        Some(path) => {
            write_report(&rendered, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_lexicon=info,warn"),
            1 => EnvFilter::new("page_lexicon=debug,info"),
            2 => EnvFilter::new("page_lexicon=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Reports own stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (or defaults) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.follow_links {
        config.crawler.follow_links = true;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(max_concurrent) = cli.max_concurrent {
        config.crawler.max_concurrent_fetches = max_concurrent;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.crawler.timeout_ms = timeout_ms;
    }
    if cli.refetch_for_links {
        config.crawler.link_discovery = LinkDiscovery::Refetch;
    }
    if let Some(top_n) = cli.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(min_frequency) = cli.min_frequency {
        config.analysis.min_frequency = min_frequency;
    }
    if let Some(path) = &cli.stopwords {
        config.analysis.stopwords_path = Some(path.to_string_lossy().into_owned());
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

fn render(report: &ScrapeReport, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Table => format_table_report(report),
        OutputFormat::Markdown => format_markdown_report(report),
    })
}

/// Handles the --dry-run mode: shows the resolved settings and entry URLs
fn handle_dry_run(config: &Config, urls: &[String]) {
    let options = CrawlOptions::from(config);

    println!("=== Page-Lexicon Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Follow links: {}", options.follow_links());
    println!("  Max pages: {}", options.max_pages());
    println!("  Max concurrent fetches: {}", options.max_concurrent_fetches());
    println!(
        "  Request timeout: {}ms",
        options.per_request_timeout().as_millis()
    );
    println!("  Link discovery: {:?}", options.link_discovery());
    println!("  Max entry URLs: {}", config.crawler.max_entry_urls);

    println!("\nRequest Headers:");
    println!("  User-Agent: {}", options.headers().user_agent);
    println!("  Accept: {}", options.headers().accept);
    println!("  Accept-Language: {}", options.headers().accept_language);

    println!("\nAnalysis:");
    println!("  Top N: {}", config.analysis.top_n);
    println!("  Min frequency: {}", config.analysis.min_frequency);
    if let Some(path) = &config.analysis.stopwords_path {
        println!("  Stopword file: {}", path);
    }
    println!("  Extra stopwords: {}", config.analysis.extra_stopwords.len());

    let entries: Vec<&String> = urls.iter().filter(|url| !url.trim().is_empty()).collect();
    println!("\nEntry URLs ({}):", entries.len());
    for url in &entries {
        println!("  - {}", normalize_url(url));
    }

    println!("\n✓ Configuration is valid");
    if entries.len() > config.crawler.max_entry_urls {
        println!(
            "✗ Too many entry URLs: {} given, at most {} allowed",
            entries.len(),
            config.crawler.max_entry_urls
        );
    } else {
        println!("✓ Would start crawling with {} entry URL(s)", entries.len());
    }
}
