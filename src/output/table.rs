//! Plain-text report for terminals

use crate::output::ScrapeReport;

/// Widest bar drawn next to a word
const BAR_WIDTH: usize = 30;

/// Formats a report as an aligned text table with proportional bars
pub fn format_table_report(report: &ScrapeReport) -> String {
    let mut out = String::new();

    out.push_str("=== Word Frequencies ===\n\n");
    out.push_str(&format!("  Pages analyzed:  {}\n", report.processed_urls));
    out.push_str(&format!("  URLs discovered: {}\n", report.discovered_urls));
    out.push_str(&format!("  Total words:     {}\n", report.total_words));
    out.push_str(&format!(
        "  Distinct words:  {}\n\n",
        report.word_frequencies.len()
    ));

    let word_width = report
        .word_frequencies
        .iter()
        .map(|word| word.text.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = report
        .word_frequencies
        .first()
        .map_or(0, |word| word.value);

    for (rank, word) in report.word_frequencies.iter().enumerate() {
        let padding = word_width - word.text.chars().count();
        out.push_str(&format!(
            "  {:>3}. {}{} {:>6} {}\n",
            rank + 1,
            word.text,
            " ".repeat(padding),
            word.value,
            "#".repeat(bar_length(word.value, max_value))
        ));
    }

    if !report.errors.is_empty() {
        out.push_str(&format!("\nFailed pages ({}):\n", report.errors.len()));
        for error in &report.errors {
            out.push_str(&format!("  - {}\n", error));
        }
    }

    out
}

fn bar_length(value: usize, max_value: usize) -> usize {
    if max_value == 0 {
        return 0;
    }
    ((value * BAR_WIDTH) / max_value).max(1)
}
