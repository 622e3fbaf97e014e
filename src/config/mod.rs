//! Configuration management module
//!
//! This module handles loading, saving, and managing the frontend configuration.
//! Configuration is stored in `~/.config/omen-rgb/config.json` with atomic writes
//! to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, LastApplied, LauncherSettings};
