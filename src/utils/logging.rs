//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! `<user config dir>/Tickdown/app.log`, rotating existing logs on startup
//! so the last few sessions stay available for inspection.

use crate::config::ConfigManager;
use crate::error::{Result, StringError, TickdownError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of historical log files to keep (app.log.1 through app.log.4)
const MAX_LOG_HISTORY: u8 = 4;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Existing logs are rotated on startup so every
/// session writes a fresh `app.log`.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::app_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("app.log");
    rotate_logs_on_startup(&log_path)?;

    // tracing_appender handles size/time based rotation only, so the
    // per-session scheme above is done by hand and the appender itself
    // never rotates.
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| TickdownError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TickdownError::ConfigError(Box::new(e)))?;

    tracing::info!("Tickdown v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// `app.log.N` shifts to `app.log.N+1` for every existing history file, the
/// oldest one is dropped, and the current `app.log` becomes `app.log.1`.
/// Runs unconditionally on every startup regardless of log size.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        TickdownError::ConfigError(StringError::new("Invalid log path"))
    })?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| TickdownError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let numbered = |n: u8| log_dir.join(format!("{log_name}.{n}"));

    let oldest = numbered(MAX_LOG_HISTORY);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_HISTORY).rev() {
        let current = numbered(i);
        if current.exists() {
            std::fs::rename(&current, numbered(i + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;

    Ok(())
}
