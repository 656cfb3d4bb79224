//! Cross-page duplicate accounting.

use std::collections::HashMap;

/// Frequency maps of titles and descriptions seen so far in one crawl.
///
/// Owned by the crawler and updated in visit order, so the first page with a
/// given title sees count 1 and later pages see 2, 3, ...
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    titles: HashMap<String, usize>,
    descriptions: HashMap<String, usize>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence and returns the count including it.
    /// Empty titles are not tracked and return 0.
    pub fn record_title(&mut self, title: &str) -> usize {
        Self::record(&mut self.titles, title)
    }

    /// Same as [`record_title`](Self::record_title) for meta descriptions.
    pub fn record_description(&mut self, description: &str) -> usize {
        Self::record(&mut self.descriptions, description)
    }

    pub fn title_count(&self, title: &str) -> usize {
        self.titles.get(title).copied().unwrap_or(0)
    }

    pub fn description_count(&self, description: &str) -> usize {
        self.descriptions.get(description).copied().unwrap_or(0)
    }

    fn record(map: &mut HashMap<String, usize>, value: &str) -> usize {
        if value.is_empty() {
            return 0;
        }
        let count = map.entry(value.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}
