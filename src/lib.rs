//! seo_audit library: on-page SEO auditing of a single website
//!
//! This library crawls a site breadth-first from a seed URL, extracts on-page SEO
//! signals from every internal HTML page (title, meta description, headings,
//! canonical, robots directives, structured data, analytics), classifies them into
//! issues, and aggregates site-wide and per-issue summaries.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{Config, run_audit};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     seed_url: "https://example.com".to_string(),
//!     max_pages: 50,
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("Crawled {} pages: {} issues, {} broken",
//!          report.site.total_pages, report.site.total_issues, report.site.error_pages);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod aggregate;
pub mod app;
pub mod classify;
pub mod config;
pub mod crawl;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod links;
pub mod parse;
mod utils;

// Re-export public API
pub use aggregate::{aggregate, IssueSummary, SiteSummary};
pub use classify::{CheckCategory, Issue, IssueDetail};
pub use config::{CliArgs, Config, LogFormat, LogLevel};
pub use crawl::{CrawlOutcome, CrawlState, Crawler, DiscoveryStats, PageRecord, PageStatus};
pub use error_handling::AuditError;
pub use run::{run_audit, run_audit_with_cancellation, AuditReport};
pub use utils::TimingStats;

// Internal run module (wires the crawl, aggregation and exports together)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::aggregate::{aggregate, IssueSummary, SiteSummary};
    use crate::app::{print_error_statistics, print_timing_statistics};
    use crate::classify::Issue;
    use crate::config::Config;
    use crate::crawl::{CrawlState, Crawler, PageRecord};
    use crate::export::{export_issues_csv, export_jsonl, export_pages_csv};
    use crate::initialization::{init_client, init_extractor};

    /// Results of an audit run.
    #[derive(Debug)]
    pub struct AuditReport {
        /// Seed URL the crawl started from
        pub seed_url: String,
        /// Final crawl state (`Completed` for every run that got past validation)
        pub state: CrawlState,
        /// One record per fetched URL
        pub pages: Vec<PageRecord>,
        /// Every issue found, in crawl order
        pub issues: Vec<Issue>,
        /// Site-level counters
        pub site: SiteSummary,
        /// Issue counts by check
        pub issue_summary: IssueSummary,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It crawls the site, prints
    /// run statistics to the log, writes the configured exports and returns the
    /// summaries.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The seed URL is invalid (`AuditError`, nothing is fetched)
    /// - The HTTP client cannot be built
    /// - An export file cannot be written
    ///
    /// A site that cannot be reached is not an error: the report then holds a
    /// single degraded record and zero issues.
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        run_audit_with_cancellation(config, CancellationToken::new()).await
    }

    /// Like [`run_audit`], stopping early (with a `Completed` report over the pages
    /// fetched so far) once `cancel` is cancelled.
    pub async fn run_audit_with_cancellation(
        config: Config,
        cancel: CancellationToken,
    ) -> Result<AuditReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let extractor = init_extractor();

        let seed_url = config.seed_url.clone();
        let csv_output = config.csv_output.clone();
        let issues_csv_output = config.issues_csv_output.clone();
        let jsonl_output = config.jsonl_output.clone();

        let mut crawler = Crawler::new(config, client, extractor).with_cancellation(cancel);
        let outcome = crawler.crawl().await?;

        print_error_statistics(&crawler.stats());
        print_timing_statistics(&crawler.timing());

        let (site, issue_summary) = aggregate(&outcome.pages, &outcome.issues, &outcome.discovery);

        if let Some(path) = csv_output {
            let rows = export_pages_csv(&path, &outcome.pages)
                .with_context(|| format!("Failed to export pages CSV to {}", path.display()))?;
            info!("Wrote {} page rows to {}", rows, path.display());
        }
        if let Some(path) = issues_csv_output {
            let rows = export_issues_csv(&path, &outcome.issues)
                .with_context(|| format!("Failed to export issues CSV to {}", path.display()))?;
            info!("Wrote {} issue rows to {}", rows, path.display());
        }
        if let Some(path) = jsonl_output {
            let rows = export_jsonl(&path, &outcome.pages, &outcome.issues)
                .with_context(|| format!("Failed to export JSONL to {}", path.display()))?;
            info!("Wrote {} JSON lines to {}", rows, path.display());
        }

        Ok(AuditReport {
            seed_url,
            state: outcome.state,
            pages: outcome.pages,
            issues: outcome.issues,
            site,
            issue_summary,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
        })
    }
}
