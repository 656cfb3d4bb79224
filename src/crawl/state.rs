//! Crawl lifecycle.

/// Lifecycle of one crawl: `Idle -> Running -> {Completed, Aborted}`.
///
/// `Aborted` is only reachable from a configuration error, before any fetch.
/// An exhausted budget, an empty queue and a stop request all end `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Idle,
    Running,
    Completed,
    Aborted,
}

impl CrawlState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlState::Idle => "idle",
            CrawlState::Running => "running",
            CrawlState::Completed => "completed",
            CrawlState::Aborted => "aborted",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CrawlState::Completed | CrawlState::Aborted)
    }
}

impl std::fmt::Display for CrawlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
