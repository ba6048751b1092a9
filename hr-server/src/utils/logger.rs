//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level`. File output is only
/// enabled when `log_dir` exists; files roll daily as `hr-server.YYYY-MM-DD`.
/// Calling this more than once keeps the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|path| path.is_dir())
        .and_then(|path| path.to_str());

    let result = match (file_dir, json.unwrap_or(false)) {
        (Some(dir), true) => {
            let file_appender = tracing_appender::rolling::daily(dir, "hr-server");
            builder.json().with_writer(file_appender).try_init()
        }
        (Some(dir), false) => {
            let file_appender = tracing_appender::rolling::daily(dir, "hr-server");
            builder.with_ansi(false).with_writer(file_appender).try_init()
        }
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_is_harmless() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dir_str = dir.path().to_str().expect("temp dir path is UTF-8");

        init_logger_with_file(Some("debug"), Some(false), Some(dir_str));
        init_logger();

        tracing::info!(target: "security", event = "test", "logger smoke test");
    }
}
