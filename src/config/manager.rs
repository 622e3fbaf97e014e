//! Configuration manager for loading and saving the frontend configuration
//!
//! The file lives at `$XDG_CONFIG_HOME/omen-rgb/config.json` (falling back to
//! `~/.config`) and is written atomically to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{OmenRgbError, Result, StringError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Application directory name under the config home
const APP_DIR: &str = "omen-rgb";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the configuration directory
    ///
    /// Returns: `$XDG_CONFIG_HOME/omen-rgb`, else `$HOME/.config/omen-rgb`,
    /// else `./omen-rgb`
    pub fn get_config_dir() -> PathBuf {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME")
                    .filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .unwrap_or_else(|| PathBuf::from("."));
        config_home.join(APP_DIR)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::get_config_dir();
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes a temporary file in the same directory, then renames it over
    /// the configuration file.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::get_config_path();

        let json = serde_json::to_string_pretty(config)?;
        let mut temp_file = NamedTempFile::new_in(&config_dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&config_path).map_err(|e| {
            OmenRgbError::ConfigError(StringError::new(format!(
                "Failed to replace {}: {}",
                config_path.display(),
                e.error
            )))
        })?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
