//! HTTP request execution.

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use url::Url;

use super::types::{FetchFailure, FetchResult, FetchedPage};
use crate::config::{MAX_ERROR_MESSAGE_LENGTH, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats};

/// Fetches one URL with an independent timeout.
///
/// Never returns an error: every transport failure is categorized, counted in
/// `stats`, and returned as `FetchResult::Failure`. Only HTML bodies are read,
/// chunk by chunk, and reading stops once `MAX_RESPONSE_BODY_SIZE` is passed.
/// An oversized page reports a `content_length` above the limit and an empty
/// body. Non-HTML sizes come from `Content-Length` (0 when absent).
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    stats: &ProcessingStats,
) -> FetchResult {
    debug!("GET {url}");
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return FetchResult::Failure(failure(stats, url, &e)),
    };

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    if final_url != url {
        debug!("{url} redirected to {final_url}");
        stats.info.increment(InfoType::HttpRedirect);
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase());

    let declared_length = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|len| len.to_str().ok())
        .and_then(|len| len.parse::<usize>().ok());

    let mut page = FetchedPage {
        status,
        content_type,
        final_url,
        body: String::new(),
        content_length: declared_length.unwrap_or(0),
    };
    if !page.is_html() {
        debug!("{url} is not HTML, body not read");
    } else if declared_length.is_some_and(|len| len > MAX_RESPONSE_BODY_SIZE) {
        debug!("{url} declares {} bytes, body not read", page.content_length);
    } else {
        match read_capped(response, MAX_RESPONSE_BODY_SIZE).await {
            Ok(CappedBody::Complete(bytes)) => {
                page.content_length = bytes.len();
                page.body = String::from_utf8_lossy(&bytes).into_owned();
            }
            Ok(CappedBody::Truncated(read)) => {
                page.content_length = page.content_length.max(read);
            }
            Err(e) => return FetchResult::Failure(failure(stats, url, &e)),
        }
    }

    debug!(
        "{url} -> {} ({} bytes, {})",
        page.status,
        page.content_length,
        page.content_type.as_deref().unwrap_or("no content-type")
    );
    FetchResult::Success(page)
}

pub(super) enum CappedBody {
    Complete(Vec<u8>),
    /// Limit passed after this many bytes; the rest was never read
    Truncated(usize),
}

pub(super) async fn read_capped(
    mut response: reqwest::Response,
    max_size: usize,
) -> Result<CappedBody, reqwest::Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if buf.len() + chunk.len() > max_size {
            return Ok(CappedBody::Truncated(buf.len() + chunk.len()));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(CappedBody::Complete(buf))
}

fn failure(stats: &ProcessingStats, url: &str, error: &reqwest::Error) -> FetchFailure {
    let kind = update_error_stats(stats, error);
    let mut reason = error.to_string();
    if reason.chars().count() > MAX_ERROR_MESSAGE_LENGTH {
        reason = reason.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
    }
    warn!("Failed to fetch {url}: {kind} ({reason})");
    FetchFailure { kind, reason }
}

/// Checks whether `path` exists at the origin of `seed`.
///
/// Returns `true` only for a 2xx answer. Failures of any kind return `false`
/// and are logged, never propagated.
pub async fn probe_resource(
    client: &reqwest::Client,
    seed: &Url,
    path: &str,
    timeout: Duration,
) -> bool {
    let target = match seed.join(path) {
        Ok(target) => target,
        Err(e) => {
            warn!("Cannot build probe URL for {path} from {seed}: {e}");
            return false;
        }
    };

    match client.get(target.as_str()).timeout(timeout).send().await {
        Ok(response) => {
            let found = response.status().is_success();
            debug!("Probe {target} -> {} (found: {found})", response.status());
            found
        }
        Err(e) => {
            debug!("Probe {target} failed: {e}");
            false
        }
    }
}
