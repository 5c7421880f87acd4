//! Markdown report generation
//!
//! This module renders a human-readable Markdown summary of a run: totals,
//! the ranked word table, and the pages that could not be used.

use crate::output::ScrapeReport;

/// Formats a report as Markdown
///
/// # Arguments
///
/// * `report` - The report to render
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &ScrapeReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Page-Lexicon Word Frequencies\n\n");

    // Run overview
    md.push_str("## Overview\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        report.generated_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Pages Analyzed**: {}\n",
        report.processed_urls
    ));
    md.push_str(&format!(
        "- **URLs Discovered**: {}\n",
        report.discovered_urls
    ));
    md.push_str(&format!("- **Total Words**: {}\n", report.total_words));
    md.push_str(&format!(
        "- **Distinct Words**: {}\n\n",
        report.word_frequencies.len()
    ));

    // Ranked words
    md.push_str("## Top Words\n\n");
    if report.word_frequencies.is_empty() {
        md.push_str("_No word reached the minimum frequency._\n\n");
    } else {
        md.push_str("| Rank | Word | Count |\n");
        md.push_str("|------|------|-------|\n");
        for (rank, word) in report.word_frequencies.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                rank + 1,
                escape_cell(&word.text),
                word.value
            ));
        }
        md.push('\n');
    }

    // Failed pages
    if !report.errors.is_empty() {
        md.push_str(&format!("## Failed Pages ({})\n\n", report.errors.len()));
        for error in &report.errors {
            md.push_str(&format!("- {}\n", error));
        }
        md.push('\n');
    }

    md
}

/// Escapes characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
