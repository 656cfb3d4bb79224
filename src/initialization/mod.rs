//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (timeouts, redirects, User-Agent)
//! - Logger
//! - Public Suffix List extractor

mod client;
mod logger;

use std::sync::Arc;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// The list is compiled into the `psl` crate, so this never fails and never
/// touches the network.
pub fn init_extractor() -> Arc<psl::List> {
    Arc::new(psl::List)
}
