//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Timing metrics for a crawl run

mod selector;
mod timing;

pub use selector::parse_selector_unsafe;
pub use timing::TimingStats;
