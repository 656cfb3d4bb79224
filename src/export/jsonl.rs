//! JSONL export.
//!
//! One JSON object per page record, with that page's issues nested under
//! `issues`. Suited to piping into `jq` or loading into other tools.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use super::output::open_output;
use crate::classify::Issue;
use crate::crawl::PageRecord;

/// Writes one JSON line per page record. Returns the number of lines.
pub fn write_jsonl<W: Write>(mut writer: W, pages: &[PageRecord], issues: &[Issue]) -> Result<usize> {
    let mut by_url: HashMap<&str, Vec<&Issue>> = HashMap::new();
    for issue in issues {
        by_url.entry(issue.url.as_str()).or_default().push(issue);
    }

    for page in pages {
        let mut value = serde_json::to_value(page)
            .with_context(|| format!("Failed to serialize record for {}", page.url))?;
        let page_issues: Vec<Value> = by_url
            .get(page.url.as_str())
            .map(|list| {
                list.iter()
                    .map(|issue| {
                        json!({
                            "check": issue.category,
                            "issue": issue.detail,
                            "measurement": issue.measurement,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        if let Value::Object(ref mut map) = value {
            map.insert("issues".to_string(), Value::Array(page_issues));
        }

        serde_json::to_writer(&mut writer, &value).context("Failed to write JSON line")?;
        writeln!(writer).context("Failed to write newline")?;
    }

    writer.flush().context("Failed to flush JSONL writer")?;
    Ok(pages.len())
}

/// Exports page records as JSON Lines to `path` (`-` for stdout).
pub fn export_jsonl(path: &Path, pages: &[PageRecord], issues: &[Issue]) -> Result<usize> {
    write_jsonl(open_output(path)?, pages, issues)
}
