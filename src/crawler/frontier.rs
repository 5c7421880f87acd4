//! Crawl frontier: the queue of URLs to fetch and the set of URLs seen
//!
//! A `Frontier` belongs to exactly one crawl call and is only touched by the
//! task driving that crawl, between batches.

use crate::url::dedup_key;
use std::collections::{HashSet, VecDeque};

/// Result of offering a discovered link to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    /// The link was new and is now queued
    Added,
    /// The link was already queued, fetched, or seen
    AlreadySeen,
    /// The seen-set has reached the page budget
    BudgetFull,
}

/// FIFO queue plus seen-set for one breadth-first crawl
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<String>,

    /// Dedup keys of every URL ever enqueued
    seen: HashSet<String>,

    /// Page budget; no link is added once `seen` reaches it
    max_pages: usize,
}

impl Frontier {
    /// Creates a frontier seeded with normalized entry URLs
    ///
    /// Entries naming the same page are queued once. All entries are seeded
    /// even if they outnumber the page budget.
    pub fn new<I, S>(entry_urls: I, max_pages: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
            max_pages,
        };

        for url in entry_urls {
            let url = url.into();
            if frontier.seen.insert(dedup_key(&url)) {
                frontier.queue.push_back(url);
            }
        }

        frontier
    }

    /// Removes up to `width` URLs from the front of the queue
    pub fn next_batch(&mut self, width: usize) -> Vec<String> {
        let take = width.min(self.queue.len());
        self.queue.drain(..take).collect()
    }

    /// Offers a discovered link for fetching
    pub fn offer(&mut self, link: &str) -> Enqueue {
        if self.seen.len() >= self.max_pages {
            return Enqueue::BudgetFull;
        }

        if !self.seen.insert(dedup_key(link)) {
            return Enqueue::AlreadySeen;
        }

        self.queue.push_back(link.to_string());
        Enqueue::Added
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of URLs waiting to be fetched
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Number of distinct URLs ever enqueued
    pub fn discovered_count(&self) -> usize {
        self.seen.len()
    }
}
