//! URL validation and normalization.
//!
//! - `validate_seed_url()` turns the user-supplied seed into a `Url` or a fatal `AuditError`
//! - `normalize()` resolves an href found on a page into the absolute, fragment-free
//!   form used as the frontier's deduplication key

use log::trace;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Schemes that are never followed, checked before resolution so that
/// `javascript:void(0)` and friends are dropped even when the base is odd.
const SKIPPED_SCHEMES: [&str; 5] = ["mailto:", "javascript:", "tel:", "data:", "ftp:"];

/// Validates the seed URL of a crawl.
///
/// Unlike links found on pages, the seed must be explicit: no scheme is added,
/// and anything other than an absolute http(s) URL with a host is rejected.
///
/// # Errors
///
/// - `AuditError::EmptySeedUrl` for empty or whitespace input
/// - `AuditError::SeedUrlTooLong` above `MAX_URL_LENGTH`
/// - `AuditError::UnsupportedScheme` if it doesn't start with `http://` or `https://`
/// - `AuditError::InvalidSeedUrl` if it doesn't parse
/// - `AuditError::MissingHost` if the parsed URL has no host
pub fn validate_seed_url(seed: &str) -> Result<Url, AuditError> {
    let trimmed = seed.trim();
    if trimmed.is_empty() {
        return Err(AuditError::EmptySeedUrl);
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(AuditError::SeedUrlTooLong {
            length: trimmed.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let lower = trimmed.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(AuditError::UnsupportedScheme(trimmed.to_string()));
    }

    let mut parsed = Url::parse(trimmed).map_err(|e| AuditError::InvalidSeedUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AuditError::MissingHost(trimmed.to_string()));
    }
    parsed.set_fragment(None);
    Ok(parsed)
}

/// Returns `false` for hrefs that must never reach the frontier.
pub fn is_followable_href(href: &str) -> bool {
    let trimmed = href.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let lower = trimmed.to_ascii_lowercase();
    !SKIPPED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Resolves `href` against `base` and strips the fragment.
///
/// Returns `None` when the href is not followable, does not resolve, resolves to
/// a non-http(s) scheme, or exceeds `MAX_URL_LENGTH`. Two hrefs that differ only
/// by fragment normalize to the same string.
pub fn normalize(href: &str, base: &Url) -> Option<Url> {
    if !is_followable_href(href) {
        trace!("Skipping unfollowable href: {href}");
        return None;
    }

    let mut resolved = base.join(href.trim()).ok()?;
    if !matches!(resolved.scheme(), "http" | "https") {
        trace!("Skipping non-http link: {resolved}");
        return None;
    }
    resolved.host_str()?;
    resolved.set_fragment(None);

    if resolved.as_str().len() > MAX_URL_LENGTH {
        trace!("Skipping link exceeding {MAX_URL_LENGTH} characters");
        return None;
    }
    Some(resolved)
}
