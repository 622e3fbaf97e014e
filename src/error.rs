//! Error types for `omen-rgb`
//!
//! This module defines all error types used by the frontend and the privileged
//! helper, providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the full cause
//! shows up in logs.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `omen-rgb`
#[derive(Debug, Error)]
pub enum OmenRgbError {
    /// Color token is not exactly six hex digits
    #[error("Invalid color '{0}': expected six hex digits (RRGGBB)")]
    InvalidColor(String),

    /// Zone token is not 0-3 or "all"
    #[error("Invalid zone '{0}': expected 0, 1, 2, 3 or all")]
    InvalidZone(String),

    /// Wrong helper invocation
    #[error("Usage: {0}")]
    Usage(String),

    /// The zone's sysfs attribute does not exist
    #[error("Zone {zone} not found at {}", path.display())]
    ZoneNotFound {
        /// Zone index
        zone: u8,
        /// Attribute path that was looked up
        path: PathBuf,
    },

    /// Writing the zone's sysfs attribute failed
    #[error("Failed to write zone {zone} at {}: {source}", path.display())]
    ZoneWriteFailed {
        /// Zone index
        zone: u8,
        /// Attribute path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Reading the zone's sysfs attribute failed
    #[error("Failed to read zone {zone} at {}: {source}", path.display())]
    ZoneReadFailed {
        /// Zone index
        zone: u8,
        /// Attribute path
        path: PathBuf,
        /// Underlying error (IO or parse)
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The user dismissed the authentication dialog (pkexec exit 126)
    #[error("Authorization cancelled by user")]
    AuthorizationCancelled,

    /// pkexec refused to run the helper (exit 127)
    #[error("Authorization failed or helper not found/executable")]
    AuthorizationFailed,

    /// The helper ran and reported failure
    #[error("Helper exited with code {code}: {stderr}")]
    HelperFailed {
        /// Helper exit code
        code: i32,
        /// Captured helper stderr, trimmed
        stderr: String,
    },

    /// The helper was killed by a signal
    #[error("Helper terminated without an exit code")]
    HelperTerminated,

    /// The helper did not finish before the deadline
    #[error("Helper timed out after {0:?}")]
    HelperTimeout(Duration),

    /// The privilege escalation program is not installed
    #[error("Escalation program not found: {}", .0.display())]
    EscalatorNotFound(PathBuf),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `omen-rgb` operations
pub type Result<T> = std::result::Result<T, OmenRgbError>;

/// Convert an error to a user-friendly message
///
/// The messages include troubleshooting hints for the common failure modes:
/// backlight off, `hp-wmi` module not loaded, polkit not set up.
pub fn get_user_friendly_error(error: &OmenRgbError) -> String {
    match error {
        OmenRgbError::InvalidColor(color) => {
            format!("'{color}' is not a valid color.\n\nUse six hex digits, for example FF8800.")
        }
        OmenRgbError::InvalidZone(zone) => {
            format!("'{zone}' is not a valid zone.\n\nUse 0, 1, 2, 3 or all.")
        }
        OmenRgbError::Usage(usage) => format!("Usage: {usage}"),
        OmenRgbError::ZoneNotFound { zone, .. } | OmenRgbError::ZoneReadFailed { zone, .. } => {
            format!(
                "Keyboard zone {zone} is not available.\n\n\
                 Please ensure:\n\
                 - The keyboard backlight is switched on\n\
                 - The hp-wmi kernel module is loaded with RGB zone support"
            )
        }
        OmenRgbError::ZoneWriteFailed { zone, source, .. } => {
            format!(
                "Failed to set keyboard zone {zone}:\n\n{source}\n\n\
                 The helper must run as root."
            )
        }
        OmenRgbError::AuthorizationCancelled => "Authorization cancelled by user.".to_string(),
        OmenRgbError::AuthorizationFailed => "Authorization failed.\n\n\
             Please ensure:\n\
             - The polkit policy for omen-rgb is installed\n\
             - The helper is installed and executable"
            .to_string(),
        OmenRgbError::HelperFailed { code, stderr } => {
            if stderr.is_empty() {
                format!("Error applying settings (code {code}).\n\nUnknown error from helper.")
            } else {
                format!("Error applying settings (code {code}).\n\n{stderr}")
            }
        }
        OmenRgbError::HelperTerminated => "The helper was terminated before finishing.".to_string(),
        OmenRgbError::HelperTimeout(_) => {
            "Command timed out (maybe waiting for password?).".to_string()
        }
        OmenRgbError::EscalatorNotFound(program) => {
            format!(
                "{} command not found.\n\nIs polkit installed and in PATH?",
                program.display()
            )
        }
        OmenRgbError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your last color may not persist.\n\
             Check that you have write permissions to:\n\
             ~/.config/omen-rgb"
            .to_string(),
        OmenRgbError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions."
            )
        }
        OmenRgbError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
