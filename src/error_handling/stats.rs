//! Crawl event counters.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One atomic counter per variant of `K`, all created up front so updates
/// never allocate or miss a key.
#[derive(Debug)]
pub struct Counters<K: Hash + Eq> {
    counts: HashMap<K, AtomicUsize>,
}

impl<K> Counters<K>
where
    K: IntoEnumIterator + Hash + Eq + Copy,
{
    fn new() -> Self {
        Self {
            counts: K::iter().map(|key| (key, AtomicUsize::new(0))).collect(),
        }
    }

    pub fn increment(&self, key: K) {
        if let Some(counter) = self.counts.get(&key) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get(&self, key: K) -> usize {
        self.counts
            .get(&key)
            .map_or(0, |counter| counter.load(Ordering::Relaxed))
    }

    pub fn total(&self) -> usize {
        self.counts
            .values()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }

    /// Non-zero counts in variant declaration order.
    pub fn nonzero(&self) -> Vec<(K, usize)> {
        K::iter()
            .map(|key| (key, self.get(key)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}

/// Everything counted during one crawl: transport errors, pages recorded with
/// a caveat, and informational events.
///
/// Shared between the crawl loop and the in-flight fetches through an `Arc`.
#[derive(Debug)]
pub struct ProcessingStats {
    pub errors: Counters<ErrorType>,
    pub warnings: Counters<WarningType>,
    pub info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            errors: Counters::new(),
            warnings: Counters::new(),
            info: Counters::new(),
        }
    }

    /// `true` when nothing at all was counted.
    pub fn is_empty(&self) -> bool {
        self.errors.total() + self.warnings.total() + self.info.total() == 0
    }
}
