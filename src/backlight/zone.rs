//! Backlight zones

use crate::error::{OmenRgbError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of independently addressable zones
pub const ZONE_COUNT: u8 = 4;

/// One keyboard backlight zone (0-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    /// All zones in write order
    pub const ALL: [Zone; ZONE_COUNT as usize] = [Zone(0), Zone(1), Zone(2), Zone(3)];

    /// Create a zone from its index, returning `None` past the last zone
    pub fn new(index: u8) -> Option<Self> {
        (index < ZONE_COUNT).then_some(Self(index))
    }

    /// Zone index (0-3)
    pub fn index(self) -> u8 {
        self.0
    }

    /// Name of the zone's sysfs attribute, e.g. `zone02_rgb`
    pub fn file_name(self) -> String {
        format!("zone{:02X}_rgb", self.0)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zones addressed by a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoneTarget {
    /// A single zone
    One(Zone),
    /// Every zone, in order
    #[default]
    All,
}

impl ZoneTarget {
    /// Token accepted by the helper for every zone
    pub const ALL_TOKEN: &'static str = "all";

    /// Zones this target expands to
    pub fn zones(self) -> Vec<Zone> {
        match self {
            Self::One(zone) => vec![zone],
            Self::All => Zone::ALL.to_vec(),
        }
    }
}

impl FromStr for ZoneTarget {
    type Err = OmenRgbError;

    /// Parse `0`, `1`, `2`, `3` or `all`. Nothing else is accepted: no
    /// whitespace, signs, leading zeros or other case.
    fn from_str(token: &str) -> Result<Self> {
        if token == Self::ALL_TOKEN {
            return Ok(Self::All);
        }

        match token.as_bytes() {
            [digit @ b'0'..=b'9'] => Zone::new(digit - b'0')
                .map(Self::One)
                .ok_or_else(|| OmenRgbError::InvalidZone(token.to_string())),
            _ => Err(OmenRgbError::InvalidZone(token.to_string())),
        }
    }
}

impl fmt::Display for ZoneTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(zone) => write!(f, "{zone}"),
            Self::All => f.write_str(Self::ALL_TOKEN),
        }
    }
}

// Stored as the helper token ("0".."3" or "all") in the config file
impl Serialize for ZoneTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZoneTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
