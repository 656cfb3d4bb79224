// Export module tests.

use super::*;
use crate::classify::{CheckCategory, Issue, IssueDetail};
use crate::crawl::{PageRecord, PageStatus};
use crate::error_handling::ErrorType;

fn sample_pages() -> Vec<PageRecord> {
    vec![
        PageRecord {
            url: "https://example.com/".to_string(),
            final_url: "https://example.com/".to_string(),
            status: PageStatus::Http(200),
            content_type: Some("text/html".to_string()),
            is_html: true,
            https: true,
            title: "Home, sweet \"home\"".to_string(),
            title_length: 18,
            title_count: 1,
            canonical: Some("https://example.com/".to_string()),
            language: "en".to_string(),
            h1_count: 1,
            h2_count: 2,
            has_schema: true,
            image_count: 4,
            page_size_kb: 1.5,
            robots_meta: "index, follow".to_string(),
            has_analytics: true,
            ..Default::default()
        },
        PageRecord {
            url: "https://example.com/down".to_string(),
            status: PageStatus::Error(ErrorType::HttpRequestTimeoutError),
            error: Some("timed out".to_string()),
            ..Default::default()
        },
    ]
}

fn sample_issues() -> Vec<Issue> {
    vec![
        Issue::new(
            "https://example.com/",
            CheckCategory::TitleTag,
            IssueDetail::Short,
            18,
        ),
        Issue::new(
            "https://example.com/",
            CheckCategory::MetaDescription,
            IssueDetail::Missing,
            0,
        ),
    ]
}

#[test]
fn test_write_pages_csv_columns_and_values() {
    let mut buf = Vec::new();
    let rows = write_pages_csv(&mut buf, &sample_pages()).unwrap();
    assert_eq!(rows, 2);

    let mut reader = ::csv::Reader::from_reader(buf.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, PAGE_COLUMNS.to_vec());

    let records: Vec<::csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);

    let home = &records[0];
    assert_eq!(&home[0], "https://example.com/");
    assert_eq!(&home[1], "200");
    assert_eq!(&home[2], "Home, sweet \"home\"");
    assert_eq!(&home[3], "18");
    assert_eq!(&home[6], "No");
    assert_eq!(&home[7], "Yes");
    assert_eq!(&home[8], "https://example.com/");
    assert_eq!(&home[9], "en");
    assert_eq!(&home[13], "Yes");
    assert_eq!(&home[14], "No");
    assert_eq!(&home[15], "4");
    assert_eq!(&home[16], "1.50");
    assert_eq!(&home[17], "index, follow");
    assert_eq!(&home[18], "Yes");

    let down = &records[1];
    assert_eq!(&down[1], "Error");
    assert_eq!(&down[2], "");
    assert_eq!(&down[7], "No");
    assert_eq!(&down[16], "0.00");
}

#[test]
fn test_write_issues_csv() {
    let mut buf = Vec::new();
    let rows = write_issues_csv(&mut buf, &sample_issues()).unwrap();
    assert_eq!(rows, 2);
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "URL,Check,Issue,Measurement",
            "https://example.com/,Title Tag,Short,18",
            "https://example.com/,Meta Description,Missing,0",
        ]
    );
}

#[test]
fn test_write_csv_empty_has_header_only() {
    let mut buf = Vec::new();
    assert_eq!(write_issues_csv(&mut buf, &[]).unwrap(), 0);
    assert_eq!(String::from_utf8(buf).unwrap(), "URL,Check,Issue,Measurement\n");
}

#[test]
fn test_write_jsonl_nests_issues() {
    let mut buf = Vec::new();
    let lines = write_jsonl(&mut buf, &sample_pages(), &sample_issues()).unwrap();
    assert_eq!(lines, 2);

    let text = String::from_utf8(buf).unwrap();
    let values: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 2);

    assert_eq!(values[0]["url"], "https://example.com/");
    assert_eq!(values[0]["status"], 200);
    assert_eq!(values[0]["issues"].as_array().unwrap().len(), 2);
    assert_eq!(values[0]["issues"][0]["check"], "Title Tag");
    assert_eq!(values[0]["issues"][0]["issue"], "Short");
    assert_eq!(values[0]["issues"][0]["measurement"], 18);

    assert_eq!(values[1]["status"], "Error");
    assert_eq!(values[1]["error"], "timed out");
    assert!(values[1]["issues"].as_array().unwrap().is_empty());
}

#[test]
fn test_export_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let pages_path = dir.path().join("pages.csv");
    let issues_path = dir.path().join("issues.csv");
    let jsonl_path = dir.path().join("pages.jsonl");

    assert_eq!(export_pages_csv(&pages_path, &sample_pages()).unwrap(), 2);
    assert_eq!(export_issues_csv(&issues_path, &sample_issues()).unwrap(), 2);
    assert_eq!(
        export_jsonl(&jsonl_path, &sample_pages(), &sample_issues()).unwrap(),
        2
    );

    let pages = std::fs::read_to_string(&pages_path).unwrap();
    assert!(pages.starts_with("URL,Status Code,Title,Title Length,"));
    assert_eq!(pages.lines().count(), 3);
    let issues = std::fs::read_to_string(&issues_path).unwrap();
    assert_eq!(issues.lines().count(), 3);
    let jsonl = std::fs::read_to_string(&jsonl_path).unwrap();
    assert_eq!(jsonl.lines().count(), 2);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/pages.csv");
    let err = export_pages_csv(&path, &sample_pages()).unwrap_err();
    assert!(err.to_string().contains("Failed to create output file"));
}
