//! Immutable per-crawl settings derived from the seed.

use std::time::Duration;

use psl::List;
use url::Url;

use crate::config::{Config, MAX_CONCURRENCY, MAX_PAGES_LIMIT};
use crate::domain::DomainScope;
use crate::error_handling::AuditError;
use crate::links::validate_seed_url;

/// Everything the crawl loop reads but never changes.
#[derive(Debug, Clone)]
pub struct SeedContext {
    /// Validated seed, fragment stripped
    pub seed: Url,
    /// Which hosts count as internal
    pub scope: DomainScope,
    /// Maximum number of URLs fetched
    pub max_pages: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Fetches kept in flight
    pub concurrency: usize,
}

impl SeedContext {
    /// Validates the seed and clamps the budget and concurrency to their limits.
    ///
    /// # Errors
    ///
    /// Returns the `AuditError` from seed validation; nothing has been fetched
    /// at that point.
    pub fn new(config: &Config, list: &List) -> Result<Self, AuditError> {
        let seed = validate_seed_url(&config.seed_url)?;
        let scope = DomainScope::from_seed(list, &seed)
            .ok_or_else(|| AuditError::MissingHost(seed.to_string()))?;

        Ok(Self {
            seed,
            scope,
            max_pages: config.max_pages.clamp(1, MAX_PAGES_LIMIT),
            timeout: config.timeout(),
            concurrency: config.concurrency.clamp(1, MAX_CONCURRENCY),
        })
    }

    /// Returns `true` if `url` is inside the crawl's domain scope.
    pub fn is_internal(&self, list: &List, url: &Url) -> bool {
        self.scope.contains(list, url)
    }
}
