//! Typed accessors over a parsed HTML document.
//!
//! `HtmlDocument` wraps `scraper::Html` and exposes one method per on-page
//! signal. Every accessor degrades to empty/zero/false when the element is absent.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static META_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name]", "META_NAME_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel]", "LINK_REL_SELECTOR"));
static HTML_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("html", "HTML_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h2", "H2_SELECTOR"));
static BREADCRUMB_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe("[class], [aria-label]", "BREADCRUMB_CANDIDATE_SELECTOR")
});
static SCRIPT_TYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script[type]", "SCRIPT_TYPE_SELECTOR"));
static ITEMTYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[itemtype]", "ITEMTYPE_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));
static BASE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("base[href]", "BASE_SELECTOR"));

const JSON_LD_TYPE: &str = "application/ld+json";

/// Heading levels counted by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

/// A parsed HTML page.
///
/// Not `Send` (the underlying tree uses `Rc`), so it must be dropped before the
/// caller awaits anything.
pub struct HtmlDocument {
    document: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Text of each `<title>` element outside inline `<svg>` graphics, with
    /// whitespace collapsed.
    pub fn titles(&self) -> Vec<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .filter(|element| !inside_svg(element))
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .collect()
    }

    /// `content` of every `<meta name="description">` (name matched case-insensitively).
    pub fn meta_descriptions(&self) -> Vec<String> {
        self.meta_contents("description")
    }

    /// `content` of every `<meta name="robots">`.
    pub fn robots_meta(&self) -> Vec<String> {
        self.meta_contents("robots")
    }

    fn meta_contents(&self, name: &str) -> Vec<String> {
        self.document
            .select(&META_NAME_SELECTOR)
            .filter(|element| {
                element
                    .value()
                    .attr("name")
                    .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
            })
            .map(|element| element.value().attr("content").unwrap_or("").trim().to_string())
            .collect()
    }

    /// `href` of every `<link>` whose `rel` tokens include `canonical`.
    pub fn canonicals(&self) -> Vec<String> {
        self.document
            .select(&LINK_REL_SELECTOR)
            .filter(|element| {
                element.value().attr("rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("canonical"))
                })
            })
            .map(|element| element.value().attr("href").unwrap_or("").trim().to_string())
            .collect()
    }

    /// `lang` attribute of the root `<html>` element.
    pub fn language(&self) -> String {
        self.document
            .select(&HTML_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("lang"))
            .map(|lang| lang.trim().to_string())
            .unwrap_or_default()
    }

    pub fn heading_count(&self, level: HeadingLevel) -> usize {
        let selector: &Selector = match level {
            HeadingLevel::H1 => &H1_SELECTOR,
            HeadingLevel::H2 => &H2_SELECTOR,
        };
        self.document.select(selector).count()
    }

    /// Any element whose class list or `aria-label` mentions "breadcrumb".
    pub fn has_breadcrumbs(&self) -> bool {
        self.document
            .select(&BREADCRUMB_CANDIDATE_SELECTOR)
            .any(|element| {
                let value = element.value();
                ["class", "aria-label"].iter().any(|attr| {
                    value
                        .attr(attr)
                        .is_some_and(|v| v.to_ascii_lowercase().contains("breadcrumb"))
                })
            })
    }

    /// Raw text of each `<script type="application/ld+json">`.
    pub fn json_ld_blocks(&self) -> Vec<String> {
        self.document
            .select(&SCRIPT_TYPE_SELECTOR)
            .filter(|element| {
                element
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_TYPE))
            })
            .map(|element| element.text().collect::<String>())
            .collect()
    }

    /// Values of microdata `itemtype` attributes.
    pub fn item_types(&self) -> Vec<String> {
        self.document
            .select(&ITEMTYPE_SELECTOR)
            .filter_map(|element| element.value().attr("itemtype"))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Any `<link>` whose `rel` mentions `icon` (covers `shortcut icon`,
    /// `apple-touch-icon`).
    pub fn has_favicon(&self) -> bool {
        self.document.select(&LINK_REL_SELECTOR).any(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel.to_ascii_lowercase().contains("icon"))
        })
    }

    pub fn image_count(&self) -> usize {
        self.document.select(&IMG_SELECTOR).count()
    }

    /// Raw `href` values of all anchors, in document order.
    pub fn links(&self) -> Vec<String> {
        self.document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// `href` of the first `<base>` element, if any.
    pub fn base_href(&self) -> Option<String> {
        self.document
            .select(&BASE_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("href"))
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
    }
}

fn inside_svg(element: &ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| e.name().eq_ignore_ascii_case("svg"))
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
