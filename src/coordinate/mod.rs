//! Coordinate values produced from grammar matches.

pub mod context;
pub mod convert;
pub mod fields;

pub use context::DecimalContext;
pub use fields::{AxisFields, NormalizedFields};

use derive_try_from_primitive::TryFromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Single-letter hemisphere indicator. The discriminants are the ASCII codes of the letters, so
/// the first byte of a direction token converts directly.
#[derive(Debug, Clone, Copy, TryFromPrimitive, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Hemisphere {
    North = 0x4e, // 'N'
    South = 0x53, // 'S'
    East = 0x45,  // 'E'
    West = 0x57,  // 'W'
}

impl Hemisphere {
    /// Resolve a direction token such as `"N"`, `"north"` or `"WEST"` from its first letter.
    pub fn from_token(token: &str) -> Option<Self> {
        let first = token.bytes().next()?;
        Self::try_from(first.to_ascii_uppercase()).ok()
    }

    pub fn letter(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }

    /// Whether values on `axis` in this hemisphere are negative. Only South negates a latitude
    /// and only West negates a longitude; any other letter leaves the value positive.
    pub fn negates(self, axis: Axis) -> bool {
        match axis {
            Axis::Latitude => self == Hemisphere::South,
            Axis::Longitude => self == Hemisphere::West,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Number of decimal places a converted coordinate is quantized to, chosen by how much
/// sub-degree detail the input carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    Degrees,
    Minutes,
    Seconds,
}

impl Precision {
    pub fn decimal_places(self) -> u32 {
        match self {
            Precision::Degrees => 0,
            Precision::Minutes => 3,
            Precision::Seconds => 6,
        }
    }
}

/// A signed decimal latitude/longitude pair. Values are exact decimals; their scale is part of
/// the value, so `46.500` and `46.5` render differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Coordinate {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// The latitude and longitude as fixed-decimal strings.
    pub fn to_strings(&self) -> (String, String) {
        (self.latitude.to_string(), self.longitude.to_string())
    }

    /// Join latitude and longitude with `separator`, e.g. `"58.235278,-77.333333"`.
    pub fn join(&self, separator: &str) -> String {
        format!("{}{}{}", self.latitude, separator, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
