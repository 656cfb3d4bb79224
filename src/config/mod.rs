//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, rule thresholds)
//! - Logging option types
//! - The library `Config` struct and the `CliArgs` command-line parser

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::CliArgs;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
