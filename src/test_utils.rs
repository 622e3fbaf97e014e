#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `omen-rgb` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::backlight::Zone;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `XDG_CONFIG_HOME` environment
/// variable, so parallel tests don't see each other's value.
static CONFIG_HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create empty `zoneNN_rgb` files for every zone, standing in for sysfs
pub fn create_zone_files(dir: &Path) {
    for zone in Zone::ALL {
        std::fs::write(dir.join(zone.file_name()), "").unwrap();
    }
}

/// Write a shell script to `dir` and return its path
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    path
}

/// RAII guard that points `XDG_CONFIG_HOME` at a temp directory for a test
/// scope and restores the original value when dropped.
///
/// `std::env::set_var` is unsafe because other threads may read the
/// environment concurrently. The guard holds `CONFIG_HOME_LOCK` for its whole
/// lifetime, so tests that touch the variable run one at a time, and each
/// test uses its own `TempDir`.
pub struct ConfigHomeGuard {
    original: Option<std::ffi::OsString>,
    // Held for the guard's lifetime
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under CONFIG_HOME_LOCK"
)]
impl ConfigHomeGuard {
    /// Create a new guard that sets `XDG_CONFIG_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A test that panicked while holding the lock poisons it; the guarded
        // state is restored by Drop anyway
        let lock = CONFIG_HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os("XDG_CONFIG_HOME");
        // SAFETY: serialized by CONFIG_HOME_LOCK, restored on drop
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under CONFIG_HOME_LOCK"
)]
impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        // SAFETY: still holding CONFIG_HOME_LOCK
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var("XDG_CONFIG_HOME", original);
            }
        } else {
            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
