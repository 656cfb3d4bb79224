//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_CONCURRENCY, MAX_PAGES_LIMIT,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Crawl up to 20 pages and print the summaries
/// seo_audit https://example.com
///
/// # Larger crawl with exports
/// seo_audit https://example.com --max-pages 200 --concurrency 4 \
///     --csv pages.csv --issues-csv issues.csv --jsonl pages.jsonl
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    version,
    about = "Crawls a website from a seed URL and reports on-page SEO issues."
)]
pub struct CliArgs {
    /// Seed URL (must start with http:// or https://)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Maximum number of pages to fetch
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_PAGES as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_PAGES_LIMIT as u64)
    )]
    pub max_pages: u64,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// Number of fetches kept in flight (1 keeps the crawl strictly breadth-first)
    #[arg(
        long,
        default_value_t = DEFAULT_CONCURRENCY as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_CONCURRENCY as u64)
    )]
    pub concurrency: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Write page records as CSV to this path (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write one CSV row per issue to this path (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    pub issues_csv: Option<PathBuf>,

    /// Write page records as JSON Lines to this path (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    pub jsonl: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl CliArgs {
    /// Library configuration for these options (logging options excluded).
    pub fn to_config(&self) -> Config {
        Config {
            seed_url: self.url.clone(),
            max_pages: self.max_pages as usize,
            timeout_seconds: self.timeout_seconds,
            concurrency: self.concurrency as usize,
            user_agent: self.user_agent.clone(),
            csv_output: self.csv.clone(),
            issues_csv_output: self.issues_csv.clone(),
            jsonl_output: self.jsonl.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["seo_audit", "https://example.com"]).unwrap();
        let config = args.to_config();
        assert_eq!(config.seed_url, "https://example.com");
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.csv_output.is_none());
        assert!(matches!(args.log_level, LogLevel::Info));
        assert!(matches!(args.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_all_options() {
        let args = CliArgs::try_parse_from([
            "seo_audit",
            "https://example.com",
            "--max-pages",
            "50",
            "--timeout-seconds",
            "9",
            "--concurrency",
            "4",
            "--user-agent",
            "TestBot/1.0",
            "--csv",
            "pages.csv",
            "--issues-csv",
            "issues.csv",
            "--jsonl",
            "-",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.max_pages, 50);
        assert_eq!(config.timeout_seconds, 9);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.user_agent, "TestBot/1.0");
        assert_eq!(config.csv_output, Some(PathBuf::from("pages.csv")));
        assert_eq!(config.issues_csv_output, Some(PathBuf::from("issues.csv")));
        assert_eq!(config.jsonl_output, Some(PathBuf::from("-")));
        assert!(matches!(args.log_level, LogLevel::Debug));
        assert!(matches!(args.log_format, LogFormat::Json));
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (flag, value) in [
            ("--max-pages", "0"),
            ("--max-pages", "10001"),
            ("--concurrency", "0"),
            ("--concurrency", "65"),
            ("--timeout-seconds", "0"),
        ] {
            let result = CliArgs::try_parse_from(["seo_audit", "https://example.com", flag, value]);
            assert!(result.is_err(), "{flag} {value} should be rejected");
        }
    }

    #[test]
    fn test_requires_url() {
        assert!(CliArgs::try_parse_from(["seo_audit"]).is_err());
    }
}
