//! Crawl configuration and logging option types.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// `--log-level` values, most to least restrictive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// `--log-format` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored `time target [LEVEL] message` lines
    Plain,
    /// One JSON object per line (`ts`, `level`, `target`, `msg`)
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Every crawl parameter is passed per invocation; nothing is read from
/// configuration files or the environment.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     seed_url: "https://example.com".to_string(),
///     max_pages: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the crawl starts from (must be http:// or https://)
    pub seed_url: String,

    /// Maximum number of distinct URLs fetched
    pub max_pages: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Number of fetches kept in flight
    pub concurrency: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Page records CSV output
    pub csv_output: Option<PathBuf>,

    /// Flattened issue rows CSV output
    pub issues_csv_output: Option<PathBuf>,

    /// Page records JSON Lines output
    pub jsonl_output: Option<PathBuf>,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            max_pages: DEFAULT_MAX_PAGES,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            csv_output: None,
            issues_csv_output: None,
            jsonl_output: None,
        }
    }
}
