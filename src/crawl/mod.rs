//! Crawl frontier and orchestration.
//!
//! This module provides:
//! - `SeedContext`: validated, immutable settings of one crawl
//! - `Frontier`: FIFO queue with a seen-set marked at enqueue
//! - `Crawler`: the fetch → extract → classify loop, bounded by a page budget
//!   and a concurrency limit, stoppable through a `CancellationToken`
//! - `PageRecord` / `CrawlOutcome`: what a crawl produces

mod context;
mod frontier;
mod orchestrator;
mod record;
mod state;

// Re-export public API
pub use context::SeedContext;
pub use frontier::Frontier;
pub use orchestrator::{CrawlOutcome, Crawler, DiscoveryStats};
pub use record::{PageRecord, PageStatus};
pub use state::CrawlState;
