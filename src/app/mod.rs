//! Main application modules.
//!
//! This module provides statistics printing, terminal rendering of the
//! summaries, and Ctrl-C handling used by the main application.

pub mod report;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use report::{render_issue_summary, render_site_summary};
pub use shutdown::cancel_on_ctrl_c;
pub use statistics::{print_error_statistics, print_timing_statistics};
