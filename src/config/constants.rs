//! Configuration constants.
//!
//! This module defines the constants used throughout the crawler, including
//! timeouts, size limits, and the SEO rule thresholds applied by the classifier.

use std::time::Duration;

/// Default number of distinct URLs fetched per crawl.
pub const DEFAULT_MAX_PAGES: usize = 20;
/// Upper bound accepted for `--max-pages`.
pub const MAX_PAGES_LIMIT: usize = 10_000;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds.
///
/// Capped by the per-request timeout when that is shorter.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default number of fetches kept in flight. One keeps the crawl strictly breadth-first.
pub const DEFAULT_CONCURRENCY: usize = 1;
/// Upper bound accepted for `--concurrency`.
pub const MAX_CONCURRENCY: usize = 64;

/// Maximum number of redirect hops the HTTP client follows.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Progress is logged every this many recorded pages.
pub const LOGGING_INTERVAL: usize = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; seo_audit/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

// Response and body size limits
/// Maximum response body size in bytes (5MB).
/// Larger bodies are recorded but not parsed.
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum error message length kept on a degraded page record.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Title and description rules (lengths in characters)
/// Titles shorter than this are reported as `Short`.
pub const TITLE_MIN_LENGTH: usize = 20;
/// Titles longer than this are reported as `Long`.
pub const TITLE_MAX_LENGTH: usize = 60;
/// Meta descriptions shorter than this are reported as `Short`.
pub const DESCRIPTION_MIN_LENGTH: usize = 50;
/// Meta descriptions longer than this are reported as `Long`.
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

// Auxiliary probes
/// Path probed for robots.txt, relative to the seed's origin.
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";
/// Path probed for the XML sitemap, relative to the seed's origin.
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";

/// Default per-request timeout as a `Duration`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
