//! Error categorization.
//!
//! Maps transport errors onto the `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes never reach this function: the fetcher records 4xx/5xx
/// responses as pages, so only transport failures are categorized here.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Updates processing statistics based on a `reqwest::Error`.
pub fn update_error_stats(stats: &ProcessingStats, error: &reqwest::Error) -> ErrorType {
    let error_type = categorize_reqwest_error(error);
    stats.errors.increment(error_type);
    error_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = client.get("http://127.0.0.1:9/").send().await.unwrap_err();
        let error_type = categorize_reqwest_error(&err);
        assert!(
            matches!(
                error_type,
                ErrorType::HttpRequestConnectError
                    | ErrorType::HttpRequestTimeoutError
                    | ErrorType::HttpRequestRequestError
            ),
            "unexpected category: {:?}",
            error_type
        );
    }

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client.get("not a url").send().await.unwrap_err();
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestBuilderError
        );
    }

    #[tokio::test]
    async fn test_update_error_stats_increments() {
        let stats = ProcessingStats::new();
        let client = reqwest::Client::new();
        let err = client.get("not a url").send().await.unwrap_err();
        let error_type = update_error_stats(&stats, &err);
        assert_eq!(stats.errors.get(error_type), 1);
        assert_eq!(stats.errors.total(), 1);
    }
}
