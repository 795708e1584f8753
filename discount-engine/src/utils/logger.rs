//! Logging Infrastructure
//!
//! Structured logging to stderr (stdout carries the CLI's JSON output),
//! or to a daily rolling file when a log directory exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. Calling this more
/// than once is harmless: later calls keep the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .and_then(Path::to_str)
        .map(|dir| tracing_appender::rolling::daily(dir, "discount-engine"));
    let to_file = file_appender.is_some();
    let writer = match file_appender {
        Some(appender) => BoxMakeWriter::new(appender),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!to_file)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let _ = if json.unwrap_or(false) {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}
