//! HTML parsing and SEO signal extraction.
//!
//! This module extracts on-page signals from HTML content including:
//! - Title, meta description, canonical, language, robots meta
//! - Heading and image counts, breadcrumb and favicon presence
//! - Structured data (JSON-LD, microdata)
//! - Analytics IDs (Google Analytics, Facebook Pixel, GTM, AdSense)
//! - Outgoing anchor hrefs for the crawl frontier
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod analytics;
mod fields;
mod html;
mod structured;

// Re-export public API
pub use analytics::{extract_analytics_ids, has_analytics_snippet, AnalyticsId};
pub use fields::{extract, PageFields};
pub use html::{HeadingLevel, HtmlDocument};
pub use structured::{extract_structured_data, StructuredData};
