//! SEO issue classification.
//!
//! Turns a page's extracted fields into zero or more `Issue`s:
//! - Title Tag and Meta Description: missing, too short, too long, duplicate, multiple
//! - H1 Tag: missing or multiple
//! - Indexability: `noindex` in the robots meta
//! - Canonical Tag: missing or multiple
//!
//! Duplicate detection is incremental through a crawl-owned `DuplicateTracker`.

mod rules;
mod tracker;
mod types;

// Re-export public API
pub use rules::classify;
pub use tracker::DuplicateTracker;
pub use types::{CheckCategory, Issue, IssueDetail};
