//! Logging system initialization
//!
//! The frontend logs to `~/.config/omen-rgb/omen-rgb.log`, rotating old logs
//! on startup and keeping 5 historical files. The helper logs to stderr so
//! the frontend can show its reports.

use crate::config::ConfigManager;
use crate::error::{OmenRgbError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{FilterExt, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Maximum number of historical log files to keep (omen-rgb.log.1 through omen-rgb.log.5)
const MAX_LOG_FILES: u8 = 5;

/// Log file name prefix; the appender adds the `.log` suffix
const LOG_PREFIX: &str = "omen-rgb";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize file logging for the frontend
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::ensure_config_dir()?;

    rotate_logs_on_startup(&log_dir.join(format!("{LOG_PREFIX}.log")))?;

    // Rotation::NEVER: rotation is handled on startup above
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| OmenRgbError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| OmenRgbError::ConfigError(Box::new(e)))?;

    tracing::info!("omen-rgb v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Initialize stderr logging for the privileged helper
///
/// No timestamps or targets: the lines end up in the frontend's error dialog.
/// Errors are always printed; `RUST_LOG` can only add detail.
pub fn init_helper_logging() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(env_filter().or(LevelFilter::ERROR));

    let subscriber = tracing_subscriber::registry().with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| OmenRgbError::ConfigError(Box::new(e)))
}

/// Rotate log files on application startup
///
/// - omen-rgb.log.5 is deleted (oldest log)
/// - omen-rgb.log.4 -> omen-rgb.log.5, ..., omen-rgb.log.1 -> omen-rgb.log.2
/// - omen-rgb.log -> omen-rgb.log.1
/// - A fresh omen-rgb.log will be created by the logger
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| OmenRgbError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| OmenRgbError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}
