//! Per-page SEO signals.

use super::analytics::{extract_analytics_ids, has_analytics_snippet, AnalyticsId};
use super::html::{HeadingLevel, HtmlDocument};
use super::structured::extract_structured_data;

/// Everything the extractor reads from one HTML page.
///
/// Absent elements give empty strings, zero counts and `false` flags; extraction
/// itself never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageFields {
    /// First `<title>` outside `<svg>`, whitespace collapsed
    pub title: String,
    /// Number of `<title>` elements outside `<svg>`
    pub title_count: usize,
    /// First meta description, trimmed
    pub description: String,
    /// Number of `<meta name="description">` elements
    pub description_count: usize,
    /// First non-empty canonical href, as written in the document
    pub canonical: Option<String>,
    /// Number of `<link rel="canonical">` elements
    pub canonical_count: usize,
    pub language: String,
    pub h1_count: usize,
    pub h2_count: usize,
    pub has_breadcrumbs: bool,
    pub has_schema: bool,
    pub schema_types: Vec<String>,
    pub has_favicon: bool,
    pub image_count: usize,
    /// All robots meta contents joined with ", ", lowercased
    pub robots_meta: String,
    pub analytics_ids: Vec<AnalyticsId>,
    pub has_analytics: bool,
    /// Raw anchor hrefs, unresolved
    pub links: Vec<String>,
    /// `<base href>`, used to resolve `links`
    pub base_href: Option<String>,
}

impl PageFields {
    /// Title length in Unicode scalar values.
    pub fn title_length(&self) -> usize {
        self.title.chars().count()
    }

    /// Description length in Unicode scalar values.
    pub fn description_length(&self) -> usize {
        self.description.chars().count()
    }

    pub fn is_noindex(&self) -> bool {
        self.robots_meta.contains("noindex")
    }
}

/// Parses `html` once and reads every signal from it.
pub fn extract(html: &str) -> PageFields {
    let document = HtmlDocument::parse(html);

    let titles = document.titles();
    let descriptions = document.meta_descriptions();
    let canonicals = document.canonicals();
    let structured = extract_structured_data(&document);
    let analytics_ids = extract_analytics_ids(html);
    let has_analytics = !analytics_ids.is_empty() || has_analytics_snippet(html);

    PageFields {
        title: titles.first().cloned().unwrap_or_default(),
        title_count: titles.len(),
        description: descriptions.first().cloned().unwrap_or_default(),
        description_count: descriptions.len(),
        canonical: canonicals.iter().find(|href| !href.is_empty()).cloned(),
        canonical_count: canonicals.len(),
        language: document.language(),
        h1_count: document.heading_count(HeadingLevel::H1),
        h2_count: document.heading_count(HeadingLevel::H2),
        has_breadcrumbs: document.has_breadcrumbs(),
        has_schema: structured.has_schema(),
        schema_types: structured.schema_types,
        has_favicon: document.has_favicon(),
        image_count: document.image_count(),
        robots_meta: document
            .robots_meta()
            .iter()
            .filter(|content| !content.is_empty())
            .map(|content| content.to_lowercase())
            .collect::<Vec<_>>()
            .join(", "),
        analytics_ids,
        has_analytics,
        links: document.links(),
        base_href: document.base_href(),
    }
}
