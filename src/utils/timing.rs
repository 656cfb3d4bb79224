//! Timing metrics for a crawl run.
//!
//! Tracks where time goes per page: the HTTP fetch, HTML extraction, and
//! classification. Times are stored in microseconds and shown in milliseconds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Aggregated timing statistics across all recorded pages.
#[derive(Debug, Default)]
pub struct TimingStats {
    fetch_count: AtomicU64,
    fetch_sum_us: AtomicU64,
    parse_count: AtomicU64,
    parse_sum_us: AtomicU64,
    classify_sum_us: AtomicU64,
}

fn duration_to_us(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the wall time of one fetch (successful or not).
    pub fn record_fetch(&self, elapsed: Duration) {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.fetch_sum_us
            .fetch_add(duration_to_us(elapsed), Ordering::Relaxed);
    }

    /// Records extraction and classification time of one HTML page.
    pub fn record_analysis(&self, parse: Duration, classify: Duration) {
        self.parse_count.fetch_add(1, Ordering::Relaxed);
        self.parse_sum_us
            .fetch_add(duration_to_us(parse), Ordering::Relaxed);
        self.classify_sum_us
            .fetch_add(duration_to_us(classify), Ordering::Relaxed);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Average fetch time in milliseconds (0 when nothing was fetched).
    pub fn avg_fetch_ms(&self) -> f64 {
        Self::avg_ms(&self.fetch_sum_us, &self.fetch_count)
    }

    /// Average extraction time in milliseconds.
    pub fn avg_parse_ms(&self) -> f64 {
        Self::avg_ms(&self.parse_sum_us, &self.parse_count)
    }

    /// Average classification time in milliseconds.
    pub fn avg_classify_ms(&self) -> f64 {
        Self::avg_ms(&self.classify_sum_us, &self.parse_count)
    }

    fn avg_ms(sum_us: &AtomicU64, count: &AtomicU64) -> f64 {
        let count = count.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        sum_us.load(Ordering::Relaxed) as f64 / count as f64 / 1000.0
    }

    /// Logs a summary of timing statistics.
    pub fn log_summary(&self) {
        let fetches = self.fetch_count();
        if fetches == 0 {
            log::info!("No timing data collected");
            return;
        }
        log::info!("=== Timing Metrics Summary ({} fetches) ===", fetches);
        log::info!("  {:20} {:>8.1} ms", "HTTP Fetch:", self.avg_fetch_ms());
        log::info!("  {:20} {:>8.1} ms", "HTML Extraction:", self.avg_parse_ms());
        log::info!("  {:20} {:>8.1} ms", "Classification:", self.avg_classify_ms());
    }
}
