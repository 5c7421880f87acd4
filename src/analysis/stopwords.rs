//! Stopword lists
//!
//! The built-in English and Chinese lists are plain-text resources compiled
//! into the binary. More words can be loaded from a file or added directly.

use std::collections::HashSet;
use std::path::Path;

const ENGLISH_STOPWORDS: &str = include_str!("stopwords/en.txt");
const CHINESE_STOPWORDS: &str = include_str!("stopwords/zh.txt");

/// Case-insensitive set of words excluded from frequency counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English and Chinese lists
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.extend_from_list(ENGLISH_STOPWORDS);
        set.extend_from_list(CHINESE_STOPWORDS);
        set
    }

    /// Parses a list with one word per line
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use page_lexicon::StopwordSet;
    ///
    /// let set = StopwordSet::from_list("# comment\nFoo\n\nbar\n");
    /// assert!(set.contains("foo"));
    /// assert!(set.contains("BAR"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_list(list: &str) -> Self {
        let mut set = Self::new();
        set.extend_from_list(list);
        set
    }

    /// Loads a list file in the [`StopwordSet::from_list`] format
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_list(&content))
    }

    /// Adds every entry of a list in the [`StopwordSet::from_list`] format
    pub fn extend_from_list(&mut self, list: &str) {
        let entries = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        self.extend(entries);
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the lowercased words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for StopwordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
