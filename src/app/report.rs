//! Text rendering of the audit summaries for the terminal.

use colored::Colorize;
use std::fmt::Write;

use crate::aggregate::{IssueSummary, SiteSummary};

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Renders the site summary as an aligned two-column table.
pub fn render_site_summary(site: &SiteSummary) -> String {
    let rows: [(&str, String); 9] = [
        ("Pages crawled", site.total_pages.to_string()),
        ("Internal links", site.internal_links.to_string()),
        ("External links", site.external_links.to_string()),
        ("Broken/error pages", site.error_pages.to_string()),
        ("robots.txt", yes_no(site.robots_found).to_string()),
        ("sitemap.xml", yes_no(site.sitemap_found).to_string()),
        ("Analytics", yes_no(site.analytics_found).to_string()),
        ("Noindex pages", site.noindex_pages.to_string()),
        ("Issues", site.total_issues.to_string()),
    ];

    let mut out = format!("{}\n", "Site Summary".bold());
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<20} {value}");
    }
    out
}

/// Renders issue counts grouped by check, or a single line when there are none.
pub fn render_issue_summary(issues: &IssueSummary) -> String {
    let mut out = format!("{}\n", "Issue Summary".bold());
    if issues.is_empty() {
        out.push_str("  No issues found\n");
        return out;
    }
    let _ = writeln!(out, "  {:<18} {:<14} {:>6}", "Check", "Issue", "Pages");
    for (category, detail, count) in issues.rows() {
        let _ = writeln!(
            out,
            "  {:<18} {:<14} {:>6}",
            category.as_str(),
            detail.as_str(),
            count
        );
    }
    out
}
