//! Logger initialization.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};
use serde_json::json;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies that are chatty at debug level, capped regardless of `--log-level`.
const QUIET_MODULES: [(&str, LevelFilter); 5] = [
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Installs the global `env_logger`.
///
/// `RUST_LOG` is read first, then `level` overrides the global filter and the
/// crate's own filter, so `--log-level` always wins while per-module `RUST_LOG`
/// directives for other crates still apply.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=seo_audit=debug seo_audit https://example.com
/// seo_audit https://example.com --log-level debug --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, cap.min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(record, chrono::Utc::now().timestamp_millis());
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.target().cyan(),
                level_label(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One structured log line: `{"ts", "level", "target", "msg"}`.
fn json_line(record: &Record<'_>, ts_millis: i64) -> serde_json::Value {
    json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
}

fn level_label(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
