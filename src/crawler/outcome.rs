use serde::{Deserialize, Serialize};

/// Result of attempting to retrieve one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOutcome {
    /// Normalized, scheme-qualified URL
    pub url: String,

    /// Readable page text (empty on failure)
    pub text: String,

    /// Short diagnostic, present iff the fetch failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchOutcome {
    pub fn success(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            error: None,
        }
    }

    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: String::new(),
            error: Some(error.into()),
        }
    }

    /// A usable outcome has text and no error
    pub fn is_usable(&self) -> bool {
        self.error.is_none() && !self.text.is_empty()
    }
}

/// Aggregate of a crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Outcomes in batch order, then completion order within a batch
    pub outcomes: Vec<FetchOutcome>,

    /// Distinct URLs ever enqueued (entry and discovered)
    pub discovered_count: usize,
}

impl CrawlResult {
    /// Outcomes that can feed the text analyzer
    pub fn usable(&self) -> impl Iterator<Item = &FetchOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_usable())
    }

    /// Outcomes that produced no usable text
    pub fn unusable(&self) -> impl Iterator<Item = &FetchOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_usable())
    }
}
