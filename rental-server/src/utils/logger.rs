//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty console) and production
//! (JSON). When a log directory is configured, logs are also written to
//! daily rotating `quote.YYYY-MM-DD.log` files, deleted after 14 days.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "quote";
const LOG_FILE_SUFFIX: &str = "log";

/// Days a rotated log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Delete rotated log files older than `retention_days` relative to `today`
///
/// Only files matching `quote.YYYY-MM-DD.log` are considered. Returns the
/// number of deleted files.
pub fn cleanup_old_logs(log_dir: &Path, today: NaiveDate, retention_days: i64) -> anyhow::Result<usize> {
    let cutoff = today - chrono::Duration::days(retention_days);
    let mut deleted = 0;

    if !log_dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(date_part) = name
                .strip_prefix(LOG_FILE_PREFIX)
                .and_then(|d| d.strip_prefix('.'))
                .and_then(|d| d.strip_suffix(LOG_FILE_SUFFIX))
                .and_then(|d| d.strip_suffix('.'))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            deleted += 1;
        }
    }

    Ok(deleted)
}

fn file_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)?;

    Ok(appender)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g., "info", "rental_server=debug")
/// * `json_format` - JSON output (production) instead of pretty output (development)
/// * `log_dir` - Optional directory for rotating file logs
///
/// `RUST_LOG` overrides `level` when set.
///
/// # Examples
/// ```no_run
/// # use rental_server::utils::init_logger_with_file;
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            let appender = file_appender(&dir)?;

            tokio::spawn(periodic_cleanup(dir));

            let layer = if json_format {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(appender)
                    .boxed()
            } else {
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(appender)
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        let today = chrono::Local::now().date_naive();
        if let Err(e) = cleanup_old_logs(&log_dir, today, LOG_RETENTION_DAYS) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }

        sleep(Duration::from_secs(3600)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"{}").unwrap();
    }

    #[test]
    fn test_cleanup_removes_only_expired_logs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "quote.2024-04-01.log");
        touch(dir.path(), "quote.2024-04-20.log");
        touch(dir.path(), "quote.2024-05-01.log");
        touch(dir.path(), "notes.2024-01-01.log");
        touch(dir.path(), "quote.latest.log");

        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let deleted = cleanup_old_logs(dir.path(), today, 14).unwrap();

        assert_eq!(deleted, 1);
        assert!(!dir.path().join("quote.2024-04-01.log").exists());
        assert!(dir.path().join("quote.2024-04-20.log").exists());
        assert!(dir.path().join("quote.2024-05-01.log").exists());
        assert!(dir.path().join("notes.2024-01-01.log").exists());
        assert!(dir.path().join("quote.latest.log").exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(cleanup_old_logs(&missing, today, 14).unwrap(), 0);
    }

    #[test]
    fn test_file_appender_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");
        file_appender(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
