//! Site-wide and per-issue summaries.
//!
//! `aggregate()` is pure: it reads the records, issues and discovery tallies of
//! a finished crawl and never touches the network.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{CheckCategory, Issue, IssueDetail};
use crate::crawl::{DiscoveryStats, PageRecord};

/// Site-level counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    pub total_pages: usize,
    pub internal_links: usize,
    pub external_links: usize,
    /// Fetch failures plus 4xx/5xx responses
    pub error_pages: usize,
    pub robots_found: bool,
    pub sitemap_found: bool,
    /// `true` if any page carried analytics
    pub analytics_found: bool,
    pub noindex_pages: usize,
    pub total_issues: usize,
}

/// Issue counts grouped by (category, detail), iterated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSummary {
    counts: BTreeMap<(CheckCategory, IssueDetail), usize>,
}

impl IssueSummary {
    pub fn count_for(&self, category: CheckCategory, detail: IssueDetail) -> usize {
        self.counts.get(&(category, detail)).copied().unwrap_or(0)
    }

    /// `(category, detail, count)` rows ordered by category then detail.
    pub fn rows(&self) -> impl Iterator<Item = (CheckCategory, IssueDetail, usize)> + '_ {
        self.counts
            .iter()
            .map(|(&(category, detail), &count)| (category, detail, count))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Builds both summaries from a finished crawl.
///
/// Link tallies and probe flags come from `discovery`, gathered while
/// crawling; they are not recomputed from the records.
pub fn aggregate(
    pages: &[PageRecord],
    issues: &[Issue],
    discovery: &DiscoveryStats,
) -> (SiteSummary, IssueSummary) {
    let site = SiteSummary {
        total_pages: pages.len(),
        internal_links: discovery.internal_links,
        external_links: discovery.external_links,
        error_pages: pages.iter().filter(|p| p.is_broken()).count(),
        robots_found: discovery.robots_found,
        sitemap_found: discovery.sitemap_found,
        analytics_found: pages.iter().any(|p| p.has_analytics),
        noindex_pages: pages.iter().filter(|p| p.noindex).count(),
        total_issues: issues.len(),
    };

    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry((issue.category, issue.detail)).or_insert(0) += 1;
    }

    (site, IssueSummary { counts })
}
