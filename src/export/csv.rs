//! CSV export.
//!
//! Two flattened views: one row per page record, and one row per issue.
//! The column order of both files is stable.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;
use std::path::Path;

use super::output::open_output;
use crate::classify::Issue;
use crate::crawl::PageRecord;

/// Page CSV header, in column order.
pub const PAGE_COLUMNS: [&str; 19] = [
    "URL",
    "Status Code",
    "Title",
    "Title Length",
    "Meta Description",
    "Description Length",
    "Noindex",
    "HTTPS",
    "Canonical URL",
    "Language",
    "H1 Count",
    "H2 Count",
    "Breadcrumbs",
    "Schema",
    "Favicon",
    "Image Count",
    "Page Size (KB)",
    "Robots Meta",
    "Analytics",
];

/// Issues CSV header, in column order.
pub const ISSUE_COLUMNS: [&str; 4] = ["URL", "Check", "Issue", "Measurement"];

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Writes page records as CSV to any writer. Returns the number of rows.
pub fn write_pages_csv<W: Write>(writer: W, pages: &[PageRecord]) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);
    writer
        .write_record(PAGE_COLUMNS)
        .context("Failed to write CSV header")?;

    for page in pages {
        writer
            .write_record([
                page.url.clone(),
                page.status.to_string(),
                page.title.clone(),
                page.title_length.to_string(),
                page.description.clone(),
                page.description_length.to_string(),
                yes_no(page.noindex).to_string(),
                yes_no(page.https).to_string(),
                page.canonical.clone().unwrap_or_default(),
                page.language.clone(),
                page.h1_count.to_string(),
                page.h2_count.to_string(),
                yes_no(page.has_breadcrumbs).to_string(),
                yes_no(page.has_schema).to_string(),
                yes_no(page.has_favicon).to_string(),
                page.image_count.to_string(),
                format!("{:.2}", page.page_size_kb),
                page.robots_meta.clone(),
                yes_no(page.has_analytics).to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", page.url))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(pages.len())
}

/// Writes issues as CSV to any writer. Returns the number of rows.
pub fn write_issues_csv<W: Write>(writer: W, issues: &[Issue]) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);
    writer
        .write_record(ISSUE_COLUMNS)
        .context("Failed to write CSV header")?;

    for issue in issues {
        writer
            .write_record([
                issue.url.as_str(),
                issue.category.as_str(),
                issue.detail.as_str(),
                &issue.measurement.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", issue.url))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(issues.len())
}

/// Exports page records to `path` (`-` for stdout).
pub fn export_pages_csv(path: &Path, pages: &[PageRecord]) -> Result<usize> {
    write_pages_csv(open_output(path)?, pages)
}

/// Exports issues to `path` (`-` for stdout).
pub fn export_issues_csv(path: &Path, issues: &[Issue]) -> Result<usize> {
    write_issues_csv(open_output(path)?, issues)
}
