//! 24-bit zone colors

use crate::error::{OmenRgbError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of hex digits in a zone color
pub const HEX_LEN: usize = 6;

/// RGB color written to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Default color for a fresh install
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six ASCII hex digits, either case.
    ///
    /// Anything else (a `#` prefix, whitespace, a trailing newline, three-digit
    /// shorthand) is rejected.
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != HEX_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(OmenRgbError::InvalidColor(text.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&text[i..i + 2], 16)
                .map_err(|_| OmenRgbError::InvalidColor(text.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse a color as typed by a user: same as [`Color::from_hex`] but an
    /// optional leading `#` is allowed.
    pub fn from_user_input(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        Self::from_hex(hex).map_err(|_| OmenRgbError::InvalidColor(text.to_string()))
    }

    /// Canonical `RRGGBB` form, uppercase
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = OmenRgbError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_hex(text)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Stored as "RRGGBB" in the config file
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
