//! Tests for the exports written by a full audit run.

mod helpers;

use helpers::{expect_html, expect_probes, html_page, start_site, test_config, url};
use std::fs;
use tempfile::TempDir;

use seo_audit::export::{ISSUE_COLUMNS, PAGE_COLUMNS};
use seo_audit::{run_audit, CrawlState};

#[tokio::test]
async fn test_run_audit_writes_all_exports() {
    let server = start_site().await;
    expect_html(&server, "/", html_page("Home", &["/about"])).await;
    expect_html(&server, "/about", html_page("Home", &[])).await;
    expect_probes(&server, 200, 200).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let pages_path = dir.path().join("pages.csv");
    let issues_path = dir.path().join("issues.csv");
    let jsonl_path = dir.path().join("pages.jsonl");

    let mut config = test_config(url(&server, "/"), 20, 1);
    config.csv_output = Some(pages_path.clone());
    config.issues_csv_output = Some(issues_path.clone());
    config.jsonl_output = Some(jsonl_path.clone());

    let report = run_audit(config).await.expect("audit should succeed");
    assert_eq!(report.state, CrawlState::Completed);
    assert_eq!(report.site.total_pages, 2);
    assert!(report.site.robots_found);
    assert!(report.site.sitemap_found);

    let mut pages = csv::Reader::from_path(&pages_path).expect("pages CSV");
    let header: Vec<String> = pages
        .headers()
        .expect("header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(header, PAGE_COLUMNS);
    let rows: Vec<csv::StringRecord> = pages.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], url(&server, "/"));
    assert_eq!(&rows[0][1], "200");
    assert_eq!(&rows[0][2], "Home");
    assert_eq!(&rows[0][3], "4");

    let mut issues = csv::Reader::from_path(&issues_path).expect("issues CSV");
    let header: Vec<String> = issues
        .headers()
        .expect("header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(header, ISSUE_COLUMNS);
    let issue_rows: Vec<csv::StringRecord> = issues.records().map(|r| r.expect("row")).collect();
    assert_eq!(issue_rows.len(), report.issues.len());
    let about = url(&server, "/about");
    assert!(issue_rows
        .iter()
        .any(|r| r[0] == about && &r[1] == "Title Tag" && &r[2] == "Duplicate" && &r[3] == "2"));
    assert!(issue_rows
        .iter()
        .any(|r| &r[1] == "Title Tag" && &r[2] == "Short" && &r[3] == "4"));

    let jsonl = fs::read_to_string(&jsonl_path).expect("JSONL");
    let lines: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["status"], 200);
    assert!(lines[1]["issues"]
        .as_array()
        .expect("issues array")
        .iter()
        .any(|i| i["check"] == "Title Tag" && i["issue"] == "Duplicate"));
}

#[tokio::test]
async fn test_run_audit_invalid_seed_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pages_path = dir.path().join("pages.csv");

    let mut config = test_config("not a url".to_string(), 20, 1);
    config.csv_output = Some(pages_path.clone());

    let err = run_audit(config).await.expect_err("invalid seed must fail");
    assert!(err.to_string().contains("http:// or https://"));
    assert!(!pages_path.exists());
}
