//! Analytics and tracking ID extraction.
//!
//! Scans raw HTML (inline scripts included) for Google Analytics, Google Tag
//! Manager, Facebook Pixel and AdSense identifiers, and for well-known loader
//! snippets that indicate analytics even when no ID is visible.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Analytics/Tracking ID extracted from HTML/JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnalyticsId {
    /// Analytics provider (e.g., "Google Analytics 4", "Google Tag Manager")
    pub provider: &'static str,
    /// The tracking ID (e.g., "UA-123456-1", "G-XXXXXXXXXX", "GTM-XXXXX")
    pub id: String,
}

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// One tracking-ID pattern. Capture group 1 holds the ID; `prefix` is prepended
/// to it (AdSense matches only the digits).
struct IdPattern {
    provider: &'static str,
    regex: Regex,
    prefix: &'static str,
}

static ID_PATTERNS: LazyLock<Vec<IdPattern>> = LazyLock::new(|| {
    let pattern = |provider: &'static str, re: &str, prefix: &'static str| IdPattern {
        provider,
        regex: compile_regex_unsafe(re, provider),
        prefix,
    };
    vec![
        // ga('create', 'UA-XXXXX-Y')
        pattern(
            "Google Analytics",
            r#"(?i)ga\s*\(\s*['"]create['"]\s*,\s*['"](UA-\d+-\d+)['"]"#,
            "",
        ),
        // gtag('config', 'G-XXXXXXXXXX')
        pattern(
            "Google Analytics 4",
            r#"(?i)gtag\s*\(\s*['"]config['"]\s*,\s*['"](G-[A-Z0-9]+)['"]"#,
            "",
        ),
        // gtag/js?id=G-XXXX or UA-XXXX in the loader URL
        pattern(
            "Google Analytics 4",
            r#"(?i)googletagmanager\.com/gtag/js\?id=(G-[A-Z0-9]+)"#,
            "",
        ),
        pattern("Google Tag Manager", r#"(?i)\b(GTM-[A-Z0-9]{4,})\b"#, ""),
        // fbq('init', 'XXXXX')
        pattern(
            "Facebook Pixel",
            r#"(?i)fbq\s*\(\s*['"]init['"]\s*,\s*['"](\d+)['"]"#,
            "",
        ),
        // At least 10 digits, to skip things like "pub-1"
        pattern("Google AdSense", r#"(?i)(?:ca-)?pub-(\d{10,})"#, "pub-"),
    ]
});

/// Loader snippets that mean analytics is installed.
const ANALYTICS_SIGNATURES: [&str; 6] = [
    "googletagmanager.com/gtag/js",
    "googletagmanager.com/gtm.js",
    "google-analytics.com/analytics.js",
    "google-analytics.com/ga.js",
    "connect.facebook.net",
    "gtag(",
];

/// Extracts analytics and tracking IDs, deduplicated per provider, in order of
/// first appearance per pattern.
pub fn extract_analytics_ids(html: &str) -> Vec<AnalyticsId> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();

    for pattern in ID_PATTERNS.iter() {
        for cap in pattern.regex.captures_iter(html) {
            let Some(id) = cap.get(1) else { continue };
            let id = format!("{}{}", pattern.prefix, id.as_str());
            if seen.insert((pattern.provider, id.clone())) {
                ids.push(AnalyticsId {
                    provider: pattern.provider,
                    id,
                });
            }
        }
    }

    ids
}

/// Returns `true` if the page carries a known analytics loader snippet.
pub fn has_analytics_snippet(html: &str) -> bool {
    ANALYTICS_SIGNATURES
        .iter()
        .any(|signature| html.contains(signature))
}
