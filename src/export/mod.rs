//! Export functionality for crawl results.
//!
//! This module writes the records and issues of a finished crawl into
//! formats for different use cases:
//! - Page CSV (flattened view for Excel/Sheets)
//! - Issues CSV (one row per detected issue)
//! - JSONL (nested, one object per page with its issues)
//!
//! Every exporter accepts `-` as the path to write to stdout.

mod csv;
mod jsonl;
mod output;

pub use self::csv::{
    export_issues_csv, export_pages_csv, write_issues_csv, write_pages_csv, ISSUE_COLUMNS,
    PAGE_COLUMNS,
};
pub use self::jsonl::{export_jsonl, write_jsonl};
