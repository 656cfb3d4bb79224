//! Fetch result structures.

use crate::error_handling::ErrorType;

/// Media types treated as extractable HTML.
const HTML_MEDIA_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Outcome of fetching one URL.
///
/// Transport failures are values, not errors: the crawl records them and moves on.
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered (any status code, including 4xx/5xx).
    Success(FetchedPage),
    /// No usable response (timeout, DNS, connection refused, TLS, body read).
    Failure(FetchFailure),
}

/// A response received from the server.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Lowercased `Content-Type` header, if present
    pub content_type: Option<String>,
    /// URL after following redirects
    pub final_url: String,
    /// Decoded body (lossy UTF-8), empty when not read
    pub body: String,
    /// Body size in bytes as received
    pub content_length: usize,
}

impl FetchedPage {
    /// Returns `true` if the response should be handed to the extractor.
    ///
    /// A missing `Content-Type` header counts as HTML; some servers omit it.
    pub fn is_html(&self) -> bool {
        match &self.content_type {
            Some(ct) => HTML_MEDIA_TYPES.iter().any(|media| ct.contains(media)),
            None => true,
        }
    }

    /// Body size in kilobytes, rounded to two decimals.
    pub fn size_kb(&self) -> f64 {
        (self.content_length as f64 / 1024.0 * 100.0).round() / 100.0
    }
}

/// A fetch that produced no usable response.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// Categorized failure kind
    pub kind: ErrorType,
    /// Human-readable reason (truncated)
    pub reason: String,
}
