//! End-of-run statistics in the log.

use log::info;

use crate::error_handling::ProcessingStats;
use crate::utils::TimingStats;

/// Logs timing statistics of a crawl.
pub fn print_timing_statistics(timing_stats: &TimingStats) {
    timing_stats.log_summary();
}

/// Logs every non-zero error, warning and info counter, grouped by kind.
pub fn print_error_statistics(stats: &ProcessingStats) {
    for line in error_statistics_lines(stats) {
        info!("{line}");
    }
}

/// The lines [`print_error_statistics`] logs.
fn error_statistics_lines(stats: &ProcessingStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["No fetch errors, warnings or notable events".to_string()];
    }
    let mut lines = Vec::new();
    group_lines(
        &mut lines,
        "Fetch errors",
        stats.errors.nonzero().into_iter().map(|(k, n)| (k.as_str(), n)),
    );
    group_lines(
        &mut lines,
        "Warnings",
        stats.warnings.nonzero().into_iter().map(|(k, n)| (k.as_str(), n)),
    );
    group_lines(
        &mut lines,
        "Events",
        stats.info.nonzero().into_iter().map(|(k, n)| (k.as_str(), n)),
    );
    lines
}

fn group_lines(
    lines: &mut Vec<String>,
    heading: &str,
    rows: impl Iterator<Item = (&'static str, usize)>,
) {
    let rows: Vec<_> = rows.collect();
    if rows.is_empty() {
        return;
    }
    let total: usize = rows.iter().map(|(_, n)| n).sum();
    lines.push(format!("{heading} ({total} total):"));
    for (label, count) in rows {
        lines.push(format!("   {label}: {count}"));
    }
}
