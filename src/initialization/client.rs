//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used for every crawl request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall request timeout from the config
/// - A connect timeout no longer than the request timeout
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let timeout = config.timeout();
    let connect_timeout = timeout.min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
