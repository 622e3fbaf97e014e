//! Configuration data models
//!
//! This module defines the data structures used for the frontend configuration.

use crate::backlight::{Color, ZoneTarget};
use crate::launcher::{DEFAULT_ESCALATOR, Launcher};
use crate::policy::HELPER_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level frontend configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Last successfully applied selection, used as the next default
    pub last_applied: LastApplied,
    /// How the privileged helper is launched
    pub launcher: LauncherSettings,
}

/// Zone and color of the last successful apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastApplied {
    /// Zone token
    pub zone: ZoneTarget,
    /// Color
    pub color: Color,
}

/// Privileged launch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Privilege escalation program
    pub escalator: PathBuf,
    /// Absolute path of the helper; must match the installed polkit policy
    pub helper_path: PathBuf,
    /// Seconds to wait for the helper, password prompt included (1-300)
    pub timeout_secs: u64,
}

impl LauncherSettings {
    /// Accepted timeout range in seconds
    pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=300;

    /// Build a launcher, clamping the timeout into range
    pub fn to_launcher(&self) -> Launcher {
        let secs = self
            .timeout_secs
            .clamp(*Self::TIMEOUT_RANGE.start(), *Self::TIMEOUT_RANGE.end());
        Launcher::new(
            self.escalator.clone(),
            self.helper_path.clone(),
            Duration::from_secs(secs),
        )
    }
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            escalator: PathBuf::from(DEFAULT_ESCALATOR),
            helper_path: PathBuf::from(HELPER_PATH),
            timeout_secs: 15,
        }
    }
}
