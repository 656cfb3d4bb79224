// Link normalization tests.

use super::*;
use proptest::prelude::*;

fn base() -> Url {
    Url::parse("https://example.com/blog/post.html").unwrap()
}

#[test]
fn test_validate_seed_url_accepts_http_and_https() {
    assert_eq!(
        validate_seed_url("https://example.com").unwrap().as_str(),
        "https://example.com/"
    );
    assert_eq!(
        validate_seed_url("http://example.com/path").unwrap().as_str(),
        "http://example.com/path"
    );
}

#[test]
fn test_validate_seed_url_trims_whitespace_and_fragment() {
    let url = validate_seed_url("  https://example.com/page#top  ").unwrap();
    assert_eq!(url.as_str(), "https://example.com/page");
}

#[test]
fn test_validate_seed_url_empty() {
    assert!(matches!(validate_seed_url(""), Err(AuditError::EmptySeedUrl)));
    assert!(matches!(
        validate_seed_url("   "),
        Err(AuditError::EmptySeedUrl)
    ));
}

#[test]
fn test_validate_seed_url_requires_scheme() {
    assert!(matches!(
        validate_seed_url("example.com"),
        Err(AuditError::UnsupportedScheme(_))
    ));
    assert!(matches!(
        validate_seed_url("ftp://example.com"),
        Err(AuditError::UnsupportedScheme(_))
    ));
    assert!(matches!(
        validate_seed_url("mailto:someone@example.com"),
        Err(AuditError::UnsupportedScheme(_))
    ));
}

#[test]
fn test_validate_seed_url_unparseable() {
    assert!(matches!(
        validate_seed_url("http://exa mple.com"),
        Err(AuditError::InvalidSeedUrl { .. })
    ));
}

#[test]
fn test_validate_seed_url_without_host() {
    let result = validate_seed_url("http://");
    assert!(matches!(
        result,
        Err(AuditError::InvalidSeedUrl { .. }) | Err(AuditError::MissingHost(_))
    ));
}

#[test]
fn test_validate_seed_url_too_long() {
    let long = format!("https://example.com/{}", "a".repeat(2100));
    assert!(matches!(
        validate_seed_url(&long),
        Err(AuditError::SeedUrlTooLong { .. })
    ));
}

#[test]
fn test_normalize_relative_paths() {
    assert_eq!(
        normalize("/about", &base()).unwrap().as_str(),
        "https://example.com/about"
    );
    assert_eq!(
        normalize("other.html", &base()).unwrap().as_str(),
        "https://example.com/blog/other.html"
    );
    assert_eq!(
        normalize("../contact", &base()).unwrap().as_str(),
        "https://example.com/contact"
    );
    assert_eq!(
        normalize("//cdn.example.com/x", &base()).unwrap().as_str(),
        "https://cdn.example.com/x"
    );
}

#[test]
fn test_normalize_strips_fragment() {
    let a = normalize("/page#section-1", &base()).unwrap();
    let b = normalize("/page#section-2", &base()).unwrap();
    let c = normalize("https://example.com/page", &base()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a.fragment(), None);
}

#[test]
fn test_normalize_keeps_query() {
    assert_eq!(
        normalize("/search?q=rust#results", &base()).unwrap().as_str(),
        "https://example.com/search?q=rust"
    );
}

#[test]
fn test_normalize_rejects_special_schemes() {
    assert!(normalize("mailto:hello@example.com", &base()).is_none());
    assert!(normalize("javascript:void(0)", &base()).is_none());
    assert!(normalize("JavaScript:alert(1)", &base()).is_none());
    assert!(normalize("tel:+15551234", &base()).is_none());
    assert!(normalize("data:text/html,hi", &base()).is_none());
    assert!(normalize("ftp://files.example.com/", &base()).is_none());
}

#[test]
fn test_normalize_rejects_empty_and_fragment_only() {
    assert!(normalize("", &base()).is_none());
    assert!(normalize("   ", &base()).is_none());
    assert!(normalize("#top", &base()).is_none());
}

#[test]
fn test_is_followable_href() {
    assert!(is_followable_href("/about"));
    assert!(is_followable_href("https://example.com"));
    assert!(!is_followable_href("mailto:a@b.c"));
    assert!(!is_followable_href("  javascript:void(0)"));
    assert!(!is_followable_href("#"));
}

proptest! {
    #[test]
    fn test_normalize_fragment_never_survives(
        path in "[a-z]{1,12}(/[a-z]{1,12}){0,3}",
        fragment in "[a-z0-9]{0,20}"
    ) {
        let href = format!("/{}#{}", path, fragment);
        let normalized = normalize(&href, &base());
        prop_assert!(normalized.is_some());
        let normalized = normalized.unwrap();
        prop_assert_eq!(normalized.fragment(), None);
        let without = normalize(&format!("/{}", path), &base()).unwrap();
        prop_assert_eq!(normalized, without);
    }

    #[test]
    fn test_normalize_is_idempotent(path in "[a-z]{1,12}(/[a-z]{1,12}){0,3}") {
        let once = normalize(&format!("/{}", path), &base()).unwrap();
        let twice = normalize(once.as_str(), &base()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_never_panics(href in "\\PC{0,80}") {
        let _ = normalize(&href, &base());
    }
}
