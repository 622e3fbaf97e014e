//! `omen-rgb` - Keyboard backlight colors for HP Omen laptops
//!
//! Sets the color of the four keyboard backlight zones exposed by the `hp-wmi`
//! driver. The unprivileged `omen-rgb` frontend builds a `ColorCommand` and
//! runs the `omen-rgb-helper` binary through pkexec; the helper validates its
//! arguments and writes `RRGGBB` to each targeted zone's sysfs attribute.
//!
//! # Requirements
//!
//! - `hp-wmi` kernel module with RGB zone support, backlight switched on
//! - polkit, with the policy from `omen-rgb policy` installed

// Module declarations
pub mod backlight;
pub mod config;
pub mod error;
pub mod helper;
pub mod launcher;
pub mod policy;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use backlight::{Color, ColorCommand, Zone, ZoneTarget};
pub use error::{OmenRgbError, Result};
