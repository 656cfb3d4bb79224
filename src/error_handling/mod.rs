//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal audit error types (configuration problems reported before crawling)
//! - Processing statistics tracking (fetch errors, warnings, info metrics)
//! - Categorization of transport errors
//!
//! Counted categories:
//! - **Errors**: transport failures that leave a degraded page record
//! - **Warnings**: pages recorded without full extraction, or missing metadata
//! - **Info**: notable events (redirects, skipped links)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::{Counters, ProcessingStats};
pub use types::{AuditError, ErrorType, InfoType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_stats_are_empty() {
        let stats = ProcessingStats::new();
        assert!(stats.is_empty());
        assert!(ErrorType::iter().all(|e| stats.errors.get(e) == 0));
        assert!(stats.warnings.nonzero().is_empty());
        assert_eq!(stats.info.total(), 0);
    }

    #[test]
    fn test_counters_are_independent_per_kind() {
        let stats = ProcessingStats::new();
        stats.errors.increment(ErrorType::HttpRequestTimeoutError);
        stats.errors.increment(ErrorType::HttpRequestTimeoutError);
        stats.errors.increment(ErrorType::HttpRequestConnectError);
        stats.warnings.increment(WarningType::MissingTitle);

        assert!(!stats.is_empty());
        assert_eq!(stats.errors.get(ErrorType::HttpRequestTimeoutError), 2);
        assert_eq!(stats.errors.total(), 3);
        assert_eq!(stats.warnings.total(), 1);
        assert_eq!(stats.info.get(InfoType::HttpRedirect), 0);
    }

    #[test]
    fn test_nonzero_follows_declaration_order() {
        let stats = ProcessingStats::new();
        stats.info.increment(InfoType::UnsupportedLinkSkipped);
        stats.info.increment(InfoType::HttpRedirect);
        stats.info.increment(InfoType::UnsupportedLinkSkipped);
        assert_eq!(
            stats.info.nonzero(),
            vec![
                (InfoType::HttpRedirect, 1),
                (InfoType::UnsupportedLinkSkipped, 2)
            ]
        );
    }
}
