//! Error type definitions.
//!
//! This module defines the fatal error types of an audit plus the error, warning,
//! and info categories counted while crawling.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Fatal configuration errors.
///
/// These are reported before any request is made. A crawl that runs but fetches
/// nothing is not an error; it yields all-zero summaries instead.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The seed URL was empty or whitespace.
    #[error("Seed URL is empty")]
    EmptySeedUrl,

    /// The seed URL could not be parsed.
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeedUrl { url: String, reason: String },

    /// The seed URL does not start with http:// or https://.
    #[error("Seed URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),

    /// The seed URL has no host component.
    #[error("Seed URL '{0}' has no host")]
    MissingHost(String),

    /// The seed URL exceeds the maximum accepted length.
    #[error("Seed URL exceeds maximum length ({length} > {max})")]
    SeedUrlTooLong { length: usize, max: usize },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Transport-level failures recorded while fetching pages.
///
/// A failed fetch never aborts the crawl; it is counted here and recorded as a
/// degraded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
}

/// Conditions that do not prevent a page from being recorded but are worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    NonHtmlContent,
    BodyTooLarge,
    MissingTitle,
    MissingMetaDescription,
    HttpErrorStatus,
}

/// Informational events counted during a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,
    ExternalLinkSkipped,
    UnsupportedLinkSkipped,
    ExternalRedirect,
    RedirectTargetAlreadyFetched,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::NonHtmlContent => "Non-HTML content",
            WarningType::BodyTooLarge => "Body too large to parse",
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::HttpErrorStatus => "HTTP error status (4xx/5xx)",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::ExternalLinkSkipped => "External link not followed",
            InfoType::UnsupportedLinkSkipped => "Unsupported link skipped",
            InfoType::ExternalRedirect => "Redirect out of scope",
            InfoType::RedirectTargetAlreadyFetched => "Redirect to an already fetched page",
        }
    }
}
