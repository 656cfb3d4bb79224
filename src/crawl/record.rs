//! Per-URL crawl results.

use serde::{Serialize, Serializer};

use crate::error_handling::ErrorType;
use crate::fetch::{FetchFailure, FetchedPage};
use crate::parse::{AnalyticsId, PageFields};

/// HTTP status of a record, or the sentinel for a fetch that got no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Http(u16),
    Error(ErrorType),
}

impl PageStatus {
    /// A fetch failure or a 4xx/5xx answer.
    pub fn is_broken(&self) -> bool {
        match self {
            PageStatus::Http(code) => *code >= 400,
            PageStatus::Error(_) => true,
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            PageStatus::Http(code) => Some(*code),
            PageStatus::Error(_) => None,
        }
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageStatus::Http(code) => write!(f, "{code}"),
            PageStatus::Error(_) => f.write_str("Error"),
        }
    }
}

impl Serialize for PageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageStatus::Http(code) => serializer.serialize_u16(*code),
            PageStatus::Error(_) => serializer.serialize_str("Error"),
        }
    }
}

/// One fetched URL.
///
/// Non-HTML responses carry status, content type and size only. Fetch failures
/// carry the `Error` status and the failure reason, every other field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub final_url: String,
    pub status: PageStatus,
    pub content_type: Option<String>,
    pub is_html: bool,
    pub https: bool,
    pub title: String,
    pub title_length: usize,
    pub title_count: usize,
    pub description: String,
    pub description_length: usize,
    pub description_count: usize,
    pub robots_meta: String,
    pub noindex: bool,
    pub canonical: Option<String>,
    pub canonical_count: usize,
    pub language: String,
    pub h1_count: usize,
    pub h2_count: usize,
    pub has_breadcrumbs: bool,
    pub has_schema: bool,
    pub schema_types: Vec<String>,
    pub has_favicon: bool,
    pub image_count: usize,
    pub page_size_kb: f64,
    pub has_analytics: bool,
    pub analytics_ids: Vec<AnalyticsId>,
    pub error: Option<String>,
}

impl Default for PageStatus {
    fn default() -> Self {
        PageStatus::Http(0)
    }
}

impl PageRecord {
    /// Record for a response; `fields` is `None` when the body was not extracted.
    pub fn from_response(url: &str, page: &FetchedPage, fields: Option<&PageFields>) -> Self {
        let mut record = Self {
            url: url.to_string(),
            final_url: page.final_url.clone(),
            status: PageStatus::Http(page.status),
            content_type: page.content_type.clone(),
            is_html: page.is_html(),
            https: page.final_url.starts_with("https://"),
            page_size_kb: page.size_kb(),
            ..Default::default()
        };
        if let Some(fields) = fields {
            record.title = fields.title.clone();
            record.title_length = fields.title_length();
            record.title_count = fields.title_count;
            record.description = fields.description.clone();
            record.description_length = fields.description_length();
            record.description_count = fields.description_count;
            record.robots_meta = fields.robots_meta.clone();
            record.noindex = fields.is_noindex();
            record.canonical = fields.canonical.clone();
            record.canonical_count = fields.canonical_count;
            record.language = fields.language.clone();
            record.h1_count = fields.h1_count;
            record.h2_count = fields.h2_count;
            record.has_breadcrumbs = fields.has_breadcrumbs;
            record.has_schema = fields.has_schema;
            record.schema_types = fields.schema_types.clone();
            record.has_favicon = fields.has_favicon;
            record.image_count = fields.image_count;
            record.has_analytics = fields.has_analytics;
            record.analytics_ids = fields.analytics_ids.clone();
        }
        record
    }

    /// Degraded record for a fetch that got no response.
    pub fn from_failure(url: &str, failure: &FetchFailure) -> Self {
        Self {
            url: url.to_string(),
            status: PageStatus::Error(failure.kind),
            error: Some(failure.reason.clone()),
            ..Default::default()
        }
    }

    pub fn is_broken(&self) -> bool {
        self.status.is_broken()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(status: u16, content_type: &str) -> FetchedPage {
        FetchedPage {
            status,
            content_type: Some(content_type.to_string()),
            final_url: "https://example.com/final".to_string(),
            body: String::new(),
            content_length: 2048,
        }
    }

    #[test]
    fn test_status_display_and_broken() {
        assert_eq!(PageStatus::Http(200).to_string(), "200");
        assert_eq!(
            PageStatus::Error(ErrorType::HttpRequestTimeoutError).to_string(),
            "Error"
        );
        assert!(!PageStatus::Http(200).is_broken());
        assert!(!PageStatus::Http(399).is_broken());
        assert!(PageStatus::Http(400).is_broken());
        assert!(PageStatus::Http(503).is_broken());
        assert!(PageStatus::Error(ErrorType::HttpRequestConnectError).is_broken());
        assert_eq!(PageStatus::Http(404).code(), Some(404));
    }

    #[test]
    fn test_from_response_without_fields() {
        let record = PageRecord::from_response(
            "https://example.com/doc.pdf",
            &page(200, "application/pdf"),
            None,
        );
        assert_eq!(record.status, PageStatus::Http(200));
        assert!(!record.is_html);
        assert!(record.https);
        assert_eq!(record.page_size_kb, 2.0);
        assert_eq!(record.title, "");
        assert_eq!(record.h1_count, 0);
        assert_eq!(record.final_url, "https://example.com/final");
    }

    #[test]
    fn test_from_response_with_fields() {
        let fields = crate::parse::extract(
            r#"<html lang="de"><head><title>Willkommen</title><meta name="robots" content="noindex"></head><body><h1>x</h1></body></html>"#,
        );
        let record =
            PageRecord::from_response("https://example.com/", &page(200, "text/html"), Some(&fields));
        assert_eq!(record.title, "Willkommen");
        assert_eq!(record.title_length, 10);
        assert_eq!(record.language, "de");
        assert!(record.noindex);
        assert_eq!(record.h1_count, 1);
    }

    #[test]
    fn test_from_failure_is_degraded() {
        let failure = FetchFailure {
            kind: ErrorType::HttpRequestConnectError,
            reason: "connection refused".to_string(),
        };
        let record = PageRecord::from_failure("https://example.com/", &failure);
        assert!(record.is_broken());
        assert_eq!(record.status.to_string(), "Error");
        assert_eq!(record.error.as_deref(), Some("connection refused"));
        assert!(!record.https);
        assert_eq!(record.page_size_kb, 0.0);
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_serialize_status() {
        let json = serde_json::to_value(PageStatus::Http(301)).unwrap();
        assert_eq!(json, serde_json::json!(301));
        let json = serde_json::to_value(PageStatus::Error(ErrorType::HttpRequestOtherError)).unwrap();
        assert_eq!(json, serde_json::json!("Error"));
    }
}
