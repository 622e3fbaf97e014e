//! Keyboard backlight model and sysfs writer
//!
//! HP Omen laptops expose four RGB zones through the `hp-wmi` driver. Each zone
//! has a sysfs attribute that takes six hex digits (`RRGGBB`):
//!
//! ```text
//! /sys/devices/platform/hp-wmi/rgb_zones/zone00_rgb
//! /sys/devices/platform/hp-wmi/rgb_zones/zone01_rgb
//! /sys/devices/platform/hp-wmi/rgb_zones/zone02_rgb
//! /sys/devices/platform/hp-wmi/rgb_zones/zone03_rgb
//! ```
//!
//! # Architecture
//!
//! - `Zone` / `ZoneTarget`: a single zone or all of them
//! - `Color`: 24-bit color with strict `RRGGBB` parsing
//! - `ColorCommand`: the value passed from the frontend to the helper
//! - `ZoneWriter`: writes colors to the zone attributes and reports per zone
//!
//! # Example Usage
//!
//! ```no_run
//! use omen_rgb::backlight::{ColorCommand, ZoneWriter};
//!
//! let command = ColorCommand::parse("2", "FF0000")?;
//! let report = ZoneWriter::default().apply(&command);
//! assert!(report.is_success());
//! # Ok::<(), omen_rgb::error::OmenRgbError>(())
//! ```

pub mod color;
pub mod command;
pub mod writer;
pub mod zone;

pub use color::Color;
pub use command::ColorCommand;
pub use writer::{ApplyReport, SYSFS_ZONES_DIR, ZoneWriter};
pub use zone::{Zone, ZoneTarget};
