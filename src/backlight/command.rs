//! Color command passed from the frontend to the privileged helper

use crate::backlight::{Color, ZoneTarget};
use crate::error::Result;
use std::fmt;

/// A request to paint one zone, or all of them, with a color.
///
/// Created when the user submits, handed to the helper once as two argv
/// tokens and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCommand {
    /// Zones to paint
    pub target: ZoneTarget,
    /// Color to write
    pub color: Color,
}

impl ColorCommand {
    /// Create a command from already-validated parts
    pub fn new(target: ZoneTarget, color: Color) -> Self {
        Self { target, color }
    }

    /// Validate the helper's two argv tokens.
    ///
    /// The color is checked first so a bad color is reported even when the
    /// zone is bad too.
    pub fn parse(zone: &str, color: &str) -> Result<Self> {
        let color = Color::from_hex(color)?;
        let target = zone.parse()?;
        Ok(Self { target, color })
    }

    /// Arguments for the helper: `[zone, RRGGBB]`
    pub fn to_args(&self) -> [String; 2] {
        [self.target.to_string(), self.color.to_hex()]
    }
}

impl fmt::Display for ColorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> zone {}", self.color, self.target)
    }
}
