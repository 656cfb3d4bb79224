//! Pending-URL queue with at-most-once admission.

use std::collections::{HashSet, VecDeque};

/// FIFO queue of URLs to fetch plus the set of every URL ever admitted.
///
/// A URL is marked seen when it is enqueued, so it can never be queued twice
/// or fetched after being fetched once.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    seen: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `url` unless it was seen before. Returns `true` if it was added.
    pub fn push(&mut self, url: String) -> bool {
        if !self.seen.insert(url.clone()) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Marks `url` seen without queueing it (e.g. a redirect target already
    /// fetched under another name). Returns `true` if it was new.
    pub fn mark_seen(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string())
    }

    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn is_seen(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
