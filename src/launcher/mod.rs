//! Privileged launch of the helper
//!
//! The frontend never writes sysfs itself. It runs the helper through a
//! privilege escalation program (pkexec by default):
//!
//! ```text
//! pkexec /usr/local/bin/omen-rgb-helper <zone|all> <RRGGBB>
//! ```
//!
//! # Exit status mapping
//!
//! | Status            | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | 0                 | every zone written                        |
//! | 126               | user dismissed the authentication dialog  |
//! | 127               | not authorized, or helper not found       |
//! | other             | helper failed, stderr carries the reason  |
//! | no code (signal)  | helper terminated                         |
//!
//! The launcher waits at most `timeout`; a helper still running after that
//! (typically pkexec waiting for a password) is killed.

pub mod process;

pub use process::{LaunchOutput, Launcher};

/// Default privilege escalation program
pub const DEFAULT_ESCALATOR: &str = "pkexec";

/// pkexec status when the user cancelled authentication
pub const EXIT_AUTH_CANCELLED: i32 = 126;

/// pkexec status when authorization failed or the helper is missing
pub const EXIT_AUTH_FAILED: i32 = 127;
