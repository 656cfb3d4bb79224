//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use seo_audit::app::{cancel_on_ctrl_c, render_issue_summary, render_site_summary};
use seo_audit::initialization::init_logger_with;
use seo_audit::{run_audit_with_cancellation, CliArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_logger_with(args.log_level.into(), args.log_format)
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let signal_task = cancel_on_ctrl_c(cancel.clone());

    let result = run_audit_with_cancellation(args.to_config(), cancel.clone()).await;
    cancel.cancel();
    if let Err(e) = signal_task.await {
        log::debug!("Ctrl-C handler task ended abnormally: {e}");
    }

    match result {
        Ok(report) => {
            // Exports may be going to stdout; keep the summaries on stderr then.
            let to_stdout = [&args.csv, &args.issues_csv, &args.jsonl]
                .iter()
                .all(|path| path.as_deref().map_or(true, |p| p.as_os_str() != "-"));
            let mut text = format!(
                "{}\n{}",
                render_site_summary(&report.site),
                render_issue_summary(&report.issue_summary)
            );
            if report.site.total_pages > 0 && report.site.error_pages == report.site.total_pages {
                text.push_str(&format!(
                    "\nWarning: no page of {} could be fetched\n",
                    report.seed_url
                ));
            }
            text.push_str(&format!(
                "\nAudited {} page{} in {:.1}s\n",
                report.site.total_pages,
                if report.site.total_pages == 1 { "" } else { "s" },
                report.elapsed_seconds
            ));
            if to_stdout {
                print!("{text}");
            } else {
                eprint!("{text}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
