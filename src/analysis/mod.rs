//! Word frequency analysis
//!
//! This module turns a batch of page texts into a ranked word list:
//! - Clean: lowercase, drop URLs, emails and non-letter noise
//! - Tokenize: Latin words and single CJK characters
//! - Filter: stopwords and single-character tokens
//! - Count and rank: descending by count, truncated to the top N
//!
//! # Example
//!
//! ```
//! use page_lexicon::analysis::analyze;
//!
//! let words = analyze(&["alpha alpha beta beta beta gamma"], 10, 2);
//! assert_eq!(words[0].text, "beta");
//! assert_eq!(words[0].value, 3);
//! assert_eq!(words.len(), 2);
//! ```

mod frequency;
mod stopwords;
mod text;

pub use frequency::{count_frequencies, FrequencyTable};
pub use stopwords::StopwordSet;
pub use text::{clean_text, filter_stopwords, tokenize};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static BUILTIN_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// One ranked word and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: usize,
}

/// Frequency analyzer with a configurable stopword set
#[derive(Debug, Clone)]
pub struct Analyzer {
    stopwords: StopwordSet,
}

impl Analyzer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Ranks the words of all `texts` taken together
    ///
    /// The texts are joined with a space, so counts are across documents.
    /// Returns at most `top_n` entries with a count of at least
    /// `min_frequency` (0 disables the floor), highest count first.
    pub fn analyze<S: AsRef<str>>(
        &self,
        texts: &[S],
        top_n: usize,
        min_frequency: usize,
    ) -> Vec<WordFrequency> {
        let combined = texts
            .iter()
            .map(|text| text.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        self.top_words(&combined, top_n, min_frequency)
    }

    /// Ranks the words of a single text
    pub fn top_words(&self, text: &str, top_n: usize, min_frequency: usize) -> Vec<WordFrequency> {
        let cleaned = clean_text(text);
        let tokens = filter_stopwords(tokenize(&cleaned), &self.stopwords);
        let table = count_frequencies(&tokens);

        tracing::debug!(
            "Analyzed {} chars: {} tokens kept, {} distinct",
            text.len(),
            tokens.len(),
            table.len()
        );

        table.rank(top_n, min_frequency)
    }
}

impl Default for Analyzer {
    /// Analyzer using the built-in English and Chinese stopwords
    fn default() -> Self {
        Self::new(StopwordSet::builtin())
    }
}

/// Ranks the words of `texts` using the built-in stopwords
///
/// Never fails; empty or blank input gives an empty list.
pub fn analyze<S: AsRef<str>>(texts: &[S], top_n: usize, min_frequency: usize) -> Vec<WordFrequency> {
    BUILTIN_ANALYZER.analyze(texts, top_n, min_frequency)
}
