// Shared test helpers for building small sites on a wiremock server.
//
// Every mock mounted here expects exactly one request, and `start_site` adds a
// catch-all that expects none, so a URL fetched twice or a path nobody mounted
// fails verification when the server is dropped.

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seo_audit::initialization::{init_client, init_extractor};
use seo_audit::{Config, Crawler};

/// Starts a server that rejects any request not mounted afterwards.
#[allow(dead_code)] // Used by other test files
pub async fn start_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404))
        .with_priority(u8::MAX)
        .expect(0)
        .named("unexpected request")
        .mount(&server)
        .await;
    server
}

/// Absolute URL of `path` on `server`.
#[allow(dead_code)] // Used by other test files
pub fn url(server: &MockServer, path: &str) -> String {
    format!("{}{path}", server.uri())
}

/// Builds a page with the given title, a 120-character description and one H1,
/// linking to every href in `links`.
#[allow(dead_code)] // Used by other test files
pub fn html_page(title: &str, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!("<a href=\"{href}\">link</a>"))
        .collect();
    format!(
        "<html><head><title>{title}</title>\
         <meta name=\"description\" content=\"{}\"></head>\
         <body><h1>Heading</h1>{anchors}</body></html>",
        "d".repeat(120)
    )
}

/// Expects exactly one GET of `route`, answered with `template`.
#[allow(dead_code)] // Used by other test files
pub async fn expect_once(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .named(route)
        .mount(server)
        .await;
}

/// Expects exactly one GET of `route`, answered with an HTML body.
#[allow(dead_code)] // Used by other test files
pub async fn expect_html(server: &MockServer, route: &str, body: String) {
    expect_once(
        server,
        route,
        ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"),
    )
    .await;
}

/// Expects the two post-crawl checks for robots.txt and sitemap.xml, answering
/// with the given statuses.
#[allow(dead_code)] // Used by other test files
pub async fn expect_probes(server: &MockServer, robots_status: u16, sitemap_status: u16) {
    expect_once(
        server,
        "/robots.txt",
        ResponseTemplate::new(robots_status).set_body_string("User-agent: *\n"),
    )
    .await;
    expect_once(
        server,
        "/sitemap.xml",
        ResponseTemplate::new(sitemap_status).set_body_string("<urlset></urlset>"),
    )
    .await;
}

/// Config for a crawl of `seed` with a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_config(seed: String, max_pages: usize, concurrency: usize) -> Config {
    Config {
        seed_url: seed,
        max_pages,
        concurrency,
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Builds a crawler with a real client and the embedded suffix list.
#[allow(dead_code)] // Used by other test files
pub fn crawler_for(config: Config) -> Crawler {
    let client = init_client(&config).expect("Failed to build HTTP client");
    Crawler::new(config, client, init_extractor())
}

/// A URL on a local port nothing listens on.
#[allow(dead_code)] // Used by other test files
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
