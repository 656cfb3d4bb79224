//! The crawl loop.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use super::context::SeedContext;
use super::frontier::Frontier;
use super::record::PageRecord;
use super::state::CrawlState;
use crate::classify::{classify, DuplicateTracker, Issue};
use crate::config::{
    Config, LOGGING_INTERVAL, MAX_RESPONSE_BODY_SIZE, ROBOTS_TXT_PATH, SITEMAP_XML_PATH,
};
use crate::error_handling::{AuditError, InfoType, ProcessingStats, WarningType};
use crate::fetch::{fetch_page, probe_resource, FetchResult, FetchedPage};
use crate::links::{is_followable_href, normalize};
use crate::parse::extract;
use crate::utils::TimingStats;

/// Link tallies and probe flags gathered while crawling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Distinct internal URLs linked from fetched pages
    pub internal_links: usize,
    /// Distinct external URLs linked from fetched pages
    pub external_links: usize,
    pub robots_found: bool,
    pub sitemap_found: bool,
}

/// Everything a finished crawl produced.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// One record per fetched URL, in completion order
    pub pages: Vec<PageRecord>,
    pub issues: Vec<Issue>,
    pub discovery: DiscoveryStats,
    pub state: CrawlState,
    pub elapsed: Duration,
}

/// Mutable state of one running crawl. Only the loop in [`Crawler::crawl`]
/// touches it, which serializes seen-set and duplicate accounting.
#[derive(Default)]
struct CrawlRun {
    frontier: Frontier,
    tracker: DuplicateTracker,
    pages: Vec<PageRecord>,
    issues: Vec<Issue>,
    internal_links: HashSet<String>,
    external_links: HashSet<String>,
    /// Final URLs of every fetched page, fragment stripped
    fetched: HashSet<String>,
}

/// Drives one crawl from a seed URL.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::{Config, Crawler};
/// use seo_audit::initialization::{init_client, init_extractor};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     seed_url: "https://example.com".to_string(),
///     ..Default::default()
/// };
/// let client = init_client(&config)?;
/// let mut crawler = Crawler::new(config, client, init_extractor());
/// let outcome = crawler.crawl().await?;
/// println!("{} pages, {} issues", outcome.pages.len(), outcome.issues.len());
/// # Ok(())
/// # }
/// ```
pub struct Crawler {
    config: Config,
    client: Arc<reqwest::Client>,
    extractor: Arc<psl::List>,
    stats: Arc<ProcessingStats>,
    timing: Arc<TimingStats>,
    cancel: CancellationToken,
    state: CrawlState,
}

impl Crawler {
    pub fn new(config: Config, client: Arc<reqwest::Client>, extractor: Arc<psl::List>) -> Self {
        Self {
            config,
            client,
            extractor,
            stats: Arc::new(ProcessingStats::new()),
            timing: Arc::new(TimingStats::new()),
            cancel: CancellationToken::new(),
            state: CrawlState::Idle,
        }
    }

    /// Uses `token` as the stop signal. Once cancelled, no new fetch is
    /// dispatched; in-flight fetches are drained and recorded.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    pub fn timing(&self) -> Arc<TimingStats> {
        Arc::clone(&self.timing)
    }

    /// Runs the crawl to completion.
    ///
    /// # Errors
    ///
    /// Returns an `AuditError` only for an invalid seed, before any request is
    /// made (state becomes `Aborted`). Every network problem after that is
    /// recorded in the outcome instead.
    pub async fn crawl(&mut self) -> Result<CrawlOutcome, AuditError> {
        let ctx = match SeedContext::new(&self.config, &self.extractor) {
            Ok(ctx) => ctx,
            Err(e) => {
                self.state = CrawlState::Aborted;
                return Err(e);
            }
        };

        self.state = CrawlState::Running;
        info!(
            "Crawling {} (scope: {}, budget: {} pages, concurrency: {})",
            ctx.seed, ctx.scope, ctx.max_pages, ctx.concurrency
        );

        let start = Instant::now();
        let mut run = CrawlRun::default();
        run.frontier.push(ctx.seed.to_string());

        let mut in_flight = FuturesUnordered::new();
        let mut dispatched = 0usize;

        loop {
            while in_flight.len() < ctx.concurrency
                && dispatched < ctx.max_pages
                && !self.cancel.is_cancelled()
            {
                let Some(url) = run.frontier.pop() else {
                    break;
                };
                if run.fetched.contains(&url) {
                    debug!("{url} was already fetched through a redirect, skipping");
                    continue;
                }
                dispatched += 1;
                let client = Arc::clone(&self.client);
                let stats = Arc::clone(&self.stats);
                let timeout = ctx.timeout;
                in_flight.push(async move {
                    let started = Instant::now();
                    let result = fetch_page(&client, &url, timeout, &stats).await;
                    (url, result, started.elapsed())
                });
            }

            let Some((url, result, elapsed)) = in_flight.next().await else {
                break;
            };
            self.timing.record_fetch(elapsed);
            self.handle_result(&ctx, &mut run, &url, result);

            if run.pages.len() % LOGGING_INTERVAL == 0 {
                info!(
                    "Crawled {} pages ({} pending, {} issues) in {:.1}s",
                    run.pages.len(),
                    run.frontier.pending(),
                    run.issues.len(),
                    start.elapsed().as_secs_f64()
                );
            }
        }

        if self.cancel.is_cancelled() {
            warn!(
                "Crawl stopped early after {} pages ({} URLs left in queue)",
                run.pages.len(),
                run.frontier.pending()
            );
        } else if dispatched >= ctx.max_pages && !run.frontier.is_empty() {
            info!(
                "Page budget of {} reached ({} URLs left in queue)",
                ctx.max_pages,
                run.frontier.pending()
            );
        }

        let (robots_found, sitemap_found) = if self.cancel.is_cancelled() {
            (false, false)
        } else {
            tokio::join!(
                probe_resource(&self.client, &ctx.seed, ROBOTS_TXT_PATH, ctx.timeout),
                probe_resource(&self.client, &ctx.seed, SITEMAP_XML_PATH, ctx.timeout),
            )
        };

        self.state = CrawlState::Completed;
        let elapsed = start.elapsed();
        info!(
            "Crawl {} in {:.1}s: {} pages, {} issues",
            self.state,
            elapsed.as_secs_f64(),
            run.pages.len(),
            run.issues.len()
        );

        Ok(CrawlOutcome {
            discovery: DiscoveryStats {
                internal_links: run.internal_links.len(),
                external_links: run.external_links.len(),
                robots_found,
                sitemap_found,
            },
            pages: run.pages,
            issues: run.issues,
            state: self.state,
            elapsed,
        })
    }

    /// Records one completed fetch and feeds its links to the frontier.
    fn handle_result(&self, ctx: &SeedContext, run: &mut CrawlRun, url: &str, result: FetchResult) {
        let page = match result {
            FetchResult::Success(page) => page,
            FetchResult::Failure(failure) => {
                run.pages.push(PageRecord::from_failure(url, &failure));
                return;
            }
        };

        if page.status >= 400 {
            self.stats.warnings.increment(WarningType::HttpErrorStatus);
        }

        let target = Url::parse(&page.final_url).ok().map(|mut target| {
            target.set_fragment(None);
            target
        });
        if let Some(target) = &target {
            if !ctx.is_internal(&self.extractor, target) {
                debug!("{url} redirected out of scope to {target}, skipping extraction");
                self.stats.info.increment(InfoType::ExternalRedirect);
                run.pages.push(PageRecord::from_response(url, &page, None));
                return;
            }
            run.frontier.mark_seen(target.as_str());
            if !run.fetched.insert(target.to_string()) {
                debug!("{url} resolved to already fetched {target}, skipping extraction");
                self.stats.info.increment(InfoType::RedirectTargetAlreadyFetched);
                run.pages.push(PageRecord::from_response(url, &page, None));
                return;
            }
        }

        if !page.is_html() {
            debug!("{url} is not HTML, skipping extraction");
            self.stats.warnings.increment(WarningType::NonHtmlContent);
            run.pages.push(PageRecord::from_response(url, &page, None));
            return;
        }
        if page.content_length > MAX_RESPONSE_BODY_SIZE {
            warn!(
                "{url} body is {} bytes, above the {} byte extraction limit",
                page.content_length, MAX_RESPONSE_BODY_SIZE
            );
            self.stats.warnings.increment(WarningType::BodyTooLarge);
            run.pages.push(PageRecord::from_response(url, &page, None));
            return;
        }

        let parse_start = Instant::now();
        let fields = extract(&page.body);
        let parse_elapsed = parse_start.elapsed();

        if fields.title.is_empty() {
            self.stats.warnings.increment(WarningType::MissingTitle);
        }
        if fields.description.is_empty() {
            self.stats.warnings.increment(WarningType::MissingMetaDescription);
        }

        let classify_start = Instant::now();
        let page_issues = classify(url, &fields, &mut run.tracker);
        self.timing
            .record_analysis(parse_elapsed, classify_start.elapsed());
        debug!(
            "{url}: title {:?}, {} issues, {} links",
            fields.title,
            page_issues.len(),
            fields.links.len()
        );

        let base = link_base(&page, fields.base_href.as_deref());
        for href in &fields.links {
            self.discover(ctx, run, href, base.as_ref());
        }

        run.pages
            .push(PageRecord::from_response(url, &page, Some(&fields)));
        run.issues.extend(page_issues);
    }

    fn discover(&self, ctx: &SeedContext, run: &mut CrawlRun, href: &str, base: Option<&Url>) {
        let Some(base) = base else { return };
        if !is_followable_href(href) {
            self.stats.info.increment(InfoType::UnsupportedLinkSkipped);
            return;
        }
        let Some(link) = normalize(href, base) else {
            self.stats.info.increment(InfoType::UnsupportedLinkSkipped);
            return;
        };

        if ctx.is_internal(&self.extractor, &link) {
            let link = link.to_string();
            run.internal_links.insert(link.clone());
            if run.frontier.push(link.clone()) {
                debug!("Queued {link}");
            }
        } else if run.external_links.insert(link.to_string()) {
            self.stats.info.increment(InfoType::ExternalLinkSkipped);
        }
    }
}

/// Base URL for resolving a page's links: `<base href>` resolved against the
/// final URL when present, the final URL otherwise.
fn link_base(page: &FetchedPage, base_href: Option<&str>) -> Option<Url> {
    let final_url = Url::parse(&page.final_url).ok()?;
    match base_href {
        Some(href) => Some(final_url.join(href).unwrap_or(final_url)),
        None => Some(final_url),
    }
}
