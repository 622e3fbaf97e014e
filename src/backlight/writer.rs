//! Zone writer
//!
//! Writes colors to the `hp-wmi` zone attributes. Every addressed zone is
//! attempted even if an earlier one failed; the caller gets one result per zone.

use crate::backlight::{Color, ColorCommand, Zone};
use crate::error::{OmenRgbError, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Directory holding the `zoneNN_rgb` attributes
pub const SYSFS_ZONES_DIR: &str = "/sys/devices/platform/hp-wmi/rgb_zones";

/// Outcome of applying a command, one entry per targeted zone in zone order
#[derive(Debug)]
pub struct ApplyReport {
    /// Per-zone results
    pub results: Vec<(Zone, Result<()>)>,
}

impl ApplyReport {
    /// True iff every targeted write succeeded
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    /// Zones whose write failed
    pub fn failed_zones(&self) -> Vec<Zone> {
        self.results
            .iter()
            .filter(|(_, result)| result.is_err())
            .map(|(zone, _)| *zone)
            .collect()
    }

    /// Errors of the failed zones, in zone order
    pub fn errors(&self) -> impl Iterator<Item = &OmenRgbError> {
        self.results.iter().filter_map(|(_, result)| result.as_ref().err())
    }
}

/// Writes zone colors under a base directory
#[derive(Debug, Clone)]
pub struct ZoneWriter {
    base_dir: PathBuf,
}

impl Default for ZoneWriter {
    fn default() -> Self {
        Self::new(SYSFS_ZONES_DIR)
    }
}

impl ZoneWriter {
    /// Create a writer for the attributes under `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory holding the zone attributes
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a zone's attribute
    pub fn zone_path(&self, zone: Zone) -> PathBuf {
        self.base_dir.join(zone.file_name())
    }

    /// Write `color` to one zone: six hex digits, no newline.
    ///
    /// The attribute is opened write-only, truncated like a shell redirect,
    /// and never created.
    pub fn write_zone(&self, zone: Zone, color: Color) -> Result<()> {
        let path = self.zone_path(zone);
        let hex = color.to_hex();

        let mut file = match OpenOptions::new().write(true).truncate(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OmenRgbError::ZoneNotFound {
                    zone: zone.index(),
                    path,
                });
            }
            Err(source) => {
                return Err(OmenRgbError::ZoneWriteFailed {
                    zone: zone.index(),
                    path,
                    source,
                });
            }
        };

        file.write_all(hex.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| OmenRgbError::ZoneWriteFailed {
                zone: zone.index(),
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} to {}", hex, path.display());
        Ok(())
    }

    /// Apply a command to every zone it targets
    pub fn apply(&self, command: &ColorCommand) -> ApplyReport {
        let results = command
            .target
            .zones()
            .into_iter()
            .map(|zone| {
                let result = self.write_zone(zone, command.color);
                match &result {
                    Ok(()) => info!("Zone {} set to {}", zone, command.color),
                    Err(e) => error!("{}", e),
                }
                (zone, result)
            })
            .collect();

        ApplyReport { results }
    }

    /// Read back a zone's current color
    pub fn read_zone(&self, zone: Zone) -> Result<Color> {
        let path = self.zone_path(zone);

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OmenRgbError::ZoneNotFound {
                    zone: zone.index(),
                    path,
                });
            }
            Err(e) => {
                return Err(OmenRgbError::ZoneReadFailed {
                    zone: zone.index(),
                    path,
                    source: Box::new(e),
                });
            }
        };

        Color::from_user_input(&text).map_err(|e| OmenRgbError::ZoneReadFailed {
            zone: zone.index(),
            path,
            source: Box::new(e),
        })
    }
}
