//! Frequency counting and ranking

use crate::analysis::WordFrequency;
use std::collections::HashMap;

/// Occurrence counts keyed by lowercased token, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Counts every token of the stream
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.record(token.as_ref());
        }
        table
    }

    /// Adds one occurrence of `token`
    pub fn record(&mut self, token: &str) {
        let key = token.to_lowercase();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(&token.to_lowercase())
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranks the table into at most `top_n` entries
    ///
    /// Entries below `min_frequency` are dropped (0 disables the floor). Higher
    /// counts come first; equal counts keep first-seen order.
    pub fn rank(self, top_n: usize, min_frequency: usize) -> Vec<WordFrequency> {
        let mut ranked: Vec<WordFrequency> = self
            .entries
            .into_iter()
            .filter(|(_, count)| *count >= min_frequency)
            .map(|(text, value)| WordFrequency { text, value })
            .collect();

        // Stable sort: ties stay in first-seen order
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked.truncate(top_n);
        ranked
    }
}

/// Counts a token stream into a [`FrequencyTable`]
pub fn count_frequencies<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FrequencyTable::from_tokens(tokens)
}
