//! Domain extraction and crawl scoping.
//!
//! Uses the Public Suffix List (PSL) to find registrable domains, so that
//! `blog.example.co.uk` and `www.example.co.uk` are both scoped to `example.co.uk`.
//!
//! Key items:
//! - `extract_domain()` - Extracts the registrable domain from a URL
//! - `DomainScope` - Decides whether a URL is internal to the crawl

use anyhow::{Context, Result};
use psl::{List, Psl};
use url::{Host, Url};

/// Extracts the registrable domain from a URL string.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, has no host, is an IP address,
/// or has no registrable domain (e.g., `localhost`).
pub fn extract_domain(list: &List, url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Failed to parse URL: {url}"))?;
    registrable_domain(list, &parsed)
        .ok_or_else(|| anyhow::anyhow!("Failed to extract registrable domain from {url}"))
}

/// Returns the registrable domain of a parsed URL, or `None` for IP hosts and
/// hosts the PSL cannot split.
fn registrable_domain(list: &List, url: &Url) -> Option<String> {
    let host = match url.host()? {
        Host::Domain(domain) => domain.trim_end_matches('.').to_ascii_lowercase(),
        Host::Ipv4(_) | Host::Ipv6(_) => return None,
    };
    let domain = list.domain(host.as_bytes())?;
    Some(String::from_utf8_lossy(domain.as_bytes()).to_string())
}

fn normalized_host(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
}

/// The set of URLs considered internal to a crawl.
///
/// Built once from the seed URL. When the seed has a registrable domain, every
/// host sharing it is internal (subdomains included). Otherwise (IP addresses,
/// `localhost`, single-label hosts) only the exact same host is internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainScope {
    /// Same registrable domain, e.g. `example.com`
    Registrable(String),
    /// Exact host match, e.g. `127.0.0.1`
    Host(String),
}

impl DomainScope {
    /// Builds the scope for a seed URL. Returns `None` if the URL has no host.
    pub fn from_seed(list: &List, seed: &Url) -> Option<Self> {
        if let Some(domain) = registrable_domain(list, seed) {
            return Some(DomainScope::Registrable(domain));
        }
        normalized_host(seed).map(DomainScope::Host)
    }

    /// Returns `true` if `url` belongs to this scope.
    pub fn contains(&self, list: &List, url: &Url) -> bool {
        match self {
            DomainScope::Registrable(domain) => {
                registrable_domain(list, url).as_deref() == Some(domain.as_str())
            }
            DomainScope::Host(host) => normalized_host(url).as_deref() == Some(host.as_str()),
        }
    }

    /// The domain or host this scope matches against.
    pub fn as_str(&self) -> &str {
        match self {
            DomainScope::Registrable(domain) => domain,
            DomainScope::Host(host) => host,
        }
    }
}

impl std::fmt::Display for DomainScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainScope::Registrable(domain) => write!(f, "*.{domain}"),
            DomainScope::Host(host) => f.write_str(host),
        }
    }
}
