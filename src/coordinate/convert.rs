//! Conversion of captured fields to signed decimal degrees.

use super::{
    fields::{resolve_hemisphere, AxisFields, NormalizedFields},
    Axis, Coordinate, DecimalContext, Hemisphere,
};
use crate::{
    error::{Error, Result},
    grammar::DecimalCaptures,
};
use rust_decimal::Decimal;
use tracing::trace;

/// Seconds above this value are read as hundredths of a minute instead of sixtieths.
pub const MAX_SEXAGESIMAL_SECONDS: u32 = 59;

/// Read a captured number without rounding. Values with more significant digits than a
/// `Decimal` holds are rejected.
fn read_decimal(field: &'static str, value: &str) -> Result<Decimal> {
    Decimal::from_str_exact(value).map_err(|source| Error::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

struct AxisValues {
    degrees: Decimal,
    minutes: Decimal,
    seconds: Decimal,
}

impl AxisValues {
    fn read(fields: &AxisFields) -> Result<Self> {
        Ok(AxisValues {
            degrees: read_decimal("degrees", &fields.degrees)?,
            minutes: read_decimal("minutes", &fields.minutes)?,
            seconds: read_decimal("seconds", &fields.seconds)?,
        })
    }

    /// `degrees + (minutes + seconds / divisor) / 60`, rounding after each operation.
    fn to_degrees(&self, divisor: Decimal, context: &DecimalContext) -> Result<Decimal> {
        let minutes = context.add(self.minutes, context.div(self.seconds, divisor)?)?;
        context.add(self.degrees, context.div(minutes, Decimal::from(60))?)
    }
}

fn signed(value: Decimal, hemisphere: Hemisphere, axis: Axis) -> Decimal {
    if hemisphere.negates(axis) {
        -value
    } else {
        value
    }
}

/// Convert degree/minute/second fields to a decimal coordinate, quantized to the number of
/// places [`NormalizedFields::precision`] selects.
///
/// Seconds are normally sixtieths of a minute, but when either axis has seconds above 59 both
/// axes' seconds are taken to be hundredths of a minute (`127 27 65` is 127°27.65').
pub fn dms_to_decimal(fields: &NormalizedFields, context: &DecimalContext) -> Result<Coordinate> {
    let places = fields.precision().decimal_places();
    let lat = AxisValues::read(&fields.latitude)?;
    let long = AxisValues::read(&fields.longitude)?;

    let sexagesimal_max = Decimal::from(MAX_SEXAGESIMAL_SECONDS);
    let divisor = if lat.seconds > sexagesimal_max || long.seconds > sexagesimal_max {
        Decimal::from(100)
    } else {
        Decimal::from(60)
    };

    let latitude = signed(
        lat.to_degrees(divisor, context)?,
        fields.latitude.hemisphere,
        Axis::Latitude,
    );
    let longitude = signed(
        long.to_degrees(divisor, context)?,
        fields.longitude.hemisphere,
        Axis::Longitude,
    );
    trace!(%latitude, %longitude, places, "converted");

    Ok(Coordinate::new(
        context.quantize(latitude, places),
        context.quantize(longitude, places),
    ))
}

/// Apply hemisphere signs to a decimal-degree match. Numbers keep exactly the digits that were
/// written. A latitude is negated by `S` or a leading `-`, a longitude by `W` or a leading `-`.
pub fn apply_signs(caps: &DecimalCaptures) -> Result<Coordinate> {
    let latitude_hemisphere = resolve_hemisphere(
        &[caps.latitude_direction, caps.latitude_trailing_direction],
        Hemisphere::South,
        Hemisphere::North,
    );
    let longitude_hemisphere = resolve_hemisphere(
        &[caps.longitude_direction, caps.longitude_trailing_direction],
        Hemisphere::West,
        Hemisphere::South,
    );

    Ok(Coordinate::new(
        signed(
            read_decimal("latitude", caps.latitude)?,
            latitude_hemisphere,
            Axis::Latitude,
        ),
        signed(
            read_decimal("longitude", caps.longitude)?,
            longitude_hemisphere,
            Axis::Longitude,
        ),
    ))
}

#[cfg(test)]
mod test {
    use super::{apply_signs, dms_to_decimal};
    use crate::{
        coordinate::{AxisFields, DecimalContext, Hemisphere, NormalizedFields},
        error::Error,
        grammar::DecimalCaptures,
    };

    fn axis(hemisphere: Hemisphere, degrees: &str, minutes: &str, seconds: &str) -> AxisFields {
        AxisFields {
            hemisphere,
            degrees: degrees.to_string(),
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
        }
    }

    fn convert(latitude: AxisFields, longitude: AxisFields) -> (String, String) {
        let fields = NormalizedFields {
            latitude,
            longitude,
        };
        dms_to_decimal(&fields, &DecimalContext::default())
            .unwrap()
            .to_strings()
    }

    fn strings(lat: &str, long: &str) -> (String, String) {
        (lat.to_string(), long.to_string())
    }

    #[test]
    fn test_seconds_precision() {
        use Hemisphere::*;
        assert_eq!(
            convert(axis(South, "50", "30", "30"), axis(West, "50", "30", "30")),
            strings("-50.508333", "-50.508333")
        );
        assert_eq!(
            convert(axis(North, "45", "10", "17"), axis(West, "076", "23", "46")),
            strings("45.171389", "-76.396111")
        );
    }

    #[test]
    fn test_hundredths_of_a_minute() {
        use Hemisphere::*;
        assert_eq!(
            convert(axis(North, "50", "27", "55"), axis(West, "127", "27", "65")),
            strings("50.459167", "-127.460833")
        );
    }

    #[test]
    fn test_minutes_precision() {
        use Hemisphere::*;
        assert_eq!(
            convert(axis(North, "53", "35", "00"), axis(West, "121", "55", "00")),
            strings("53.583", "-121.917")
        );
        assert_eq!(
            convert(axis(North, "46", "30.50", "00"), axis(West, "57", "05.25", "00")),
            strings("46.508", "-57.088")
        );
    }

    #[test]
    fn test_degrees_precision() {
        use Hemisphere::*;
        assert_eq!(
            convert(axis(North, "58", "00", "00"), axis(West, "077", "00", "00")),
            strings("58", "-77")
        );
        assert_eq!(
            convert(axis(North, "0", "00", "00"), axis(East, "0", "00", "00")),
            strings("0", "0")
        );
    }

    #[test]
    fn test_invalid_number() {
        let fields = NormalizedFields {
            latitude: axis(Hemisphere::North, "4x", "00", "00"),
            longitude: axis(Hemisphere::West, "77", "00", "00"),
        };
        match dms_to_decimal(&fields, &DecimalContext::default()) {
            Err(Error::InvalidNumber { field, value, .. }) => {
                assert_eq!(field, "degrees");
                assert_eq!(value, "4x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_apply_signs() {
        let caps = DecimalCaptures {
            latitude: "43.897481",
            longitude_direction: Some("-"),
            longitude: "80.051911",
            ..Default::default()
        };
        assert_eq!(
            apply_signs(&caps).unwrap().to_strings(),
            ("43.897481".to_string(), "-80.051911".to_string())
        );

        let caps = DecimalCaptures {
            latitude_direction: Some("S"),
            latitude: "12.50",
            longitude: "7",
            longitude_trailing_direction: Some("west"),
            ..Default::default()
        };
        assert_eq!(
            apply_signs(&caps).unwrap().to_strings(),
            ("-12.50".to_string(), "-7".to_string())
        );

        // An explicit letter outranks a minus sign
        let caps = DecimalCaptures {
            latitude_direction: Some("-"),
            latitude: "12.5",
            latitude_trailing_direction: Some("N"),
            longitude: "7.25",
            ..Default::default()
        };
        assert_eq!(
            apply_signs(&caps).unwrap().to_strings(),
            ("12.5".to_string(), "7.25".to_string())
        );
    }

    #[test]
    fn test_apply_signs_keeps_every_digit() {
        let caps = DecimalCaptures {
            latitude: "43.12345678901234567890123456",
            longitude_direction: Some("-"),
            longitude: "80.12345678901234567890123456",
            ..Default::default()
        };
        assert_eq!(
            apply_signs(&caps).unwrap().to_strings(),
            (
                "43.12345678901234567890123456".to_string(),
                "-80.12345678901234567890123456".to_string()
            )
        );

        // Too many digits to hold exactly
        let caps = DecimalCaptures {
            latitude: "43.1234567890123456789012345678901",
            longitude_direction: Some("-"),
            longitude: "80.1",
            ..Default::default()
        };
        match apply_signs(&caps) {
            Err(Error::InvalidNumber { field, value, .. }) => {
                assert_eq!(field, "latitude");
                assert_eq!(value, "43.1234567890123456789012345678901");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
