//! Canonical field values extracted from a degree/minute/second match.

use super::{Hemisphere, Precision};
use crate::grammar::{AxisCaptures, DmsCaptures};
use serde::Serialize;

/// Placeholder for a minute or second field that was not written.
pub const ZERO_FIELD: &str = "00";

/// Hemisphere and unsigned degree, minute and second strings for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisFields {
    pub hemisphere: Hemisphere,
    pub degrees: String,
    pub minutes: String,
    pub seconds: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFields {
    pub latitude: AxisFields,
    pub longitude: AxisFields,
}

/// Resolve a hemisphere from direction tokens listed in order of priority. A letter or word in
/// any token wins; failing that, a `-` in any token selects `negative`; failing that, `default`
/// applies.
pub fn resolve_hemisphere(
    tokens: &[Option<&str>],
    negative: Hemisphere,
    default: Hemisphere,
) -> Hemisphere {
    let present = || tokens.iter().filter_map(|token| *token);

    present()
        .find_map(Hemisphere::from_token)
        .or_else(|| present().find(|token| *token == "-").map(|_| negative))
        .unwrap_or(default)
}

impl NormalizedFields {
    /// Canonicalize raw captures. A latitude without any direction is taken as North and a
    /// longitude without any direction as West. Missing minutes and seconds become `"00"`. When
    /// both axes wrote fractional minutes in place of seconds, the fractions are appended to the
    /// minutes and both seconds become `"00"`.
    pub fn from_captures(caps: &DmsCaptures) -> Self {
        let (lat, long) = (&caps.latitude, &caps.longitude);

        let mut latitude = axis_fields(lat, Hemisphere::South, Hemisphere::North);
        let mut longitude = axis_fields(long, Hemisphere::West, Hemisphere::West);

        if let (Some(lat_fraction), Some(long_fraction)) =
            (lat.minute_fraction, long.minute_fraction)
        {
            latitude.minutes.push_str(lat_fraction);
            longitude.minutes.push_str(long_fraction);
        } else {
            latitude.seconds = lat.seconds.unwrap_or(ZERO_FIELD).to_string();
            longitude.seconds = long.seconds.unwrap_or(ZERO_FIELD).to_string();
        }

        NormalizedFields {
            latitude,
            longitude,
        }
    }

    /// The eight fields in order: latitude hemisphere, degrees, minutes, seconds, then the same
    /// for longitude.
    pub fn as_parts(&self) -> [&str; 8] {
        let (lat, long) = (&self.latitude, &self.longitude);
        [
            lat.hemisphere.letter(),
            &lat.degrees,
            &lat.minutes,
            &lat.seconds,
            long.hemisphere.letter(),
            &long.degrees,
            &long.minutes,
            &long.seconds,
        ]
    }

    /// How many decimal places a converted value should carry: six when either axis wrote
    /// seconds, otherwise three when either wrote minutes, otherwise none.
    pub fn precision(&self) -> Precision {
        let (lat, long) = (&self.latitude, &self.longitude);
        if lat.seconds != ZERO_FIELD || long.seconds != ZERO_FIELD {
            Precision::Seconds
        } else if lat.minutes != ZERO_FIELD || long.minutes != ZERO_FIELD {
            Precision::Minutes
        } else {
            Precision::Degrees
        }
    }
}

/// Fields for one axis with seconds left at `"00"`.
fn axis_fields(axis: &AxisCaptures, negative: Hemisphere, default: Hemisphere) -> AxisFields {
    AxisFields {
        hemisphere: resolve_hemisphere(
            &[axis.direction, axis.trailing_direction, axis.sign],
            negative,
            default,
        ),
        degrees: axis.degrees.unwrap_or(ZERO_FIELD).to_string(),
        minutes: axis.minutes.unwrap_or(ZERO_FIELD).to_string(),
        seconds: ZERO_FIELD.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::{resolve_hemisphere, NormalizedFields};
    use crate::{
        coordinate::{Hemisphere, Precision},
        grammar::{Anchor, CoordinateGrammar, DmsCaptures},
    };

    fn parts(s: &str) -> Vec<String> {
        let (_, caps) = DmsCaptures::parse(s, Anchor::Whole).unwrap();
        NormalizedFields::from_captures(&caps)
            .as_parts()
            .iter()
            .map(|part| part.to_string())
            .collect()
    }

    #[test]
    fn test_resolve_hemisphere() {
        use Hemisphere::*;
        assert_eq!(resolve_hemisphere(&[None, None], South, North), North);
        assert_eq!(resolve_hemisphere(&[Some("-"), None], South, North), South);
        assert_eq!(resolve_hemisphere(&[Some("-"), Some("N")], South, North), North);
        assert_eq!(resolve_hemisphere(&[Some("s"), Some("N")], South, North), South);
        assert_eq!(resolve_hemisphere(&[None, Some("west")], West, South), West);
    }

    #[test]
    fn test_space_separated_fields() {
        assert_eq!(
            parts("50 27 55 N 127 27 65 W"),
            ["N", "50", "27", "55", "W", "127", "27", "65"]
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        assert_eq!(
            parts("5335N / 12155W"),
            ["N", "53", "35", "00", "W", "121", "55", "00"]
        );
        assert_eq!(
            parts("58N/077W"),
            ["N", "58", "00", "00", "W", "077", "00", "00"]
        );
    }

    #[test]
    fn test_minute_fractions_join_minutes() {
        assert_eq!(
            parts("4630.50N 5705.25W"),
            ["N", "46", "30.50", "00", "W", "57", "05.25", "00"]
        );
    }

    #[test]
    fn test_signs_and_defaults() {
        assert_eq!(
            parts("-45 30 -120 15"),
            ["S", "45", "30", "00", "W", "120", "15", "00"]
        );
        // Without a direction the longitude is taken to be west
        assert_eq!(
            parts("45 30, 120 15"),
            ["N", "45", "30", "00", "W", "120", "15", "00"]
        );
        assert_eq!(
            parts("S 45 30 E 120 15"),
            ["S", "45", "30", "00", "E", "120", "15", "00"]
        );
    }

    #[test]
    fn test_precision() {
        let precision = |s: &str| {
            let (_, caps) = DmsCaptures::parse(s, Anchor::Whole).unwrap();
            NormalizedFields::from_captures(&caps).precision()
        };
        assert_eq!(precision("50 27 55 N 127 27 65 W"), Precision::Seconds);
        assert_eq!(precision("5335N / 12155W"), Precision::Minutes);
        assert_eq!(precision("58N/077W"), Precision::Degrees);
    }
}
