//! Decimal-degree coordinate pairs such as `43.897481, -80.051911`, `N 43.5 W 80.75` or
//! `(52.1 north, 3.5 west)`.

use crate::{
    coordinate::{convert, Coordinate, DecimalContext},
    grammar::{Anchor, CoordinateGrammar},
    parse::{self, attempt, Input},
};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while_m_n},
    character::complete::{char, digit1, satisfy},
    combinator::{all_consuming, not, opt, recognize, verify},
    error::context,
    sequence::{preceded, tuple},
};

pub const MAX_LATITUDE: u32 = 90;
pub const MAX_LONGITUDE: u32 = 180;

/// Substrings captured from a decimal-degree pair. `latitude` and `longitude` are unsigned
/// numbers; the direction fields hold a hemisphere word or letter, or `-` in the leading
/// position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalCaptures<'a> {
    pub latitude_direction: Option<&'a str>,
    pub latitude: &'a str,
    pub latitude_trailing_direction: Option<&'a str>,
    pub longitude_direction: Option<&'a str>,
    pub longitude: &'a str,
    pub longitude_trailing_direction: Option<&'a str>,
}

impl<'a> DecimalCaptures<'a> {
    /// Look up a captured field by its conventional short name (`latdir`, `latitude`,
    /// `latdir2`, `longdir`, `longitude`, `longdir2`).
    pub fn field(&self, name: &str) -> Option<&'a str> {
        match name {
            "latdir" => self.latitude_direction,
            "latitude" => Some(self.latitude),
            "latdir2" => self.latitude_trailing_direction,
            "longdir" => self.longitude_direction,
            "longitude" => Some(self.longitude),
            "longdir2" => self.longitude_trailing_direction,
            _ => None,
        }
    }
}

impl<'a> CoordinateGrammar<'a> for DecimalCaptures<'a> {
    const NAME: &'static str = "decimal degrees";

    fn can_parse(i: Input<'a>) -> bool {
        match i.chars().next() {
            Some(c) => c == '(' || c == '-' || c.is_ascii_digit() || "NSns".contains(c),
            None => false,
        }
    }

    fn parse(i: Input<'a>, anchor: Anchor) -> Option<(Input<'a>, Self)> {
        attempt(parse_pair, i).filter(|(rest, _)| anchor.accepts(rest))
    }

    fn to_coordinate(&self, _context: &DecimalContext) -> crate::Result<Coordinate> {
        convert::apply_signs(self)
    }
}

/// Parse a decimal-degree pair at the head of the input.
pub fn parse_pair(i: Input) -> parse::Result<DecimalCaptures> {
    let (i, _) = opt(char('('))(i)?;
    let (i, latitude_direction) = opt(alt((latitude_hemisphere, tag("-"))))(i)?;
    let (i, _) = space(i)?;
    let (i, latitude) = context("Latitude", |i| bounded_number(i, 2, MAX_LATITUDE))(i)?;
    let (i, _) = degree_suffix(i)?;
    let (i, latitude_trailing_direction) = opt(latitude_hemisphere)(i)?;

    let (i, _) = take_while(|c: char| c.is_whitespace() || c == ',')(i)?;

    let (i, longitude_direction) = opt(alt((longitude_hemisphere, tag("-"))))(i)?;
    let (i, _) = space(i)?;
    let (i, longitude) = context("Longitude", |i| bounded_number(i, 3, MAX_LONGITUDE))(i)?;
    let (i, _) = degree_suffix(i)?;
    let (i, longitude_trailing_direction) = opt(longitude_hemisphere)(i)?;
    let (i, _) = opt(char(')'))(i)?;

    Ok((
        i,
        DecimalCaptures {
            latitude_direction,
            latitude,
            latitude_trailing_direction,
            longitude_direction,
            longitude,
            longitude_trailing_direction,
        },
    ))
}

fn latitude_hemisphere(i: Input) -> parse::Result<Input> {
    alt((
        tag_no_case("NORTH"),
        tag_no_case("SOUTH"),
        tag_no_case("N"),
        tag_no_case("S"),
    ))(i)
}

fn longitude_hemisphere(i: Input) -> parse::Result<Input> {
    alt((
        tag_no_case("EAST"),
        tag_no_case("WEST"),
        tag_no_case("E"),
        tag_no_case("W"),
    ))(i)
}

/// At most one whitespace character.
fn space(i: Input) -> parse::Result<Option<char>> {
    opt(satisfy(char::is_whitespace))(i)
}

/// An optional `degrees` or `°`, with optional whitespace on either side.
fn degree_suffix(i: Input) -> parse::Result<Option<Input>> {
    let (i, _) = space(i)?;
    let (i, suffix) = opt(alt((tag_no_case("DEGREES"), tag("°"))))(i)?;
    let (i, _) = space(i)?;
    Ok((i, suffix))
}

/// An integer of at most `max_digits` digits and at most `max`, with an optional fraction.
fn bounded_number(i: Input, max_digits: usize, max: u32) -> parse::Result<Input> {
    let integer = verify(
        take_while_m_n(1, max_digits, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u32>().map_or(false, |value| value <= max),
    );
    let not_more_digits = not(satisfy(|c| c.is_ascii_digit()));
    let fraction = opt(preceded(char('.'), digit1));

    recognize(tuple((integer, not_more_digits, fraction)))(i)
}

/// Parse a decimal-degree pair covering all of `i`, for diagnostics.
pub fn parse_whole(i: Input) -> parse::Result<DecimalCaptures> {
    all_consuming(parse_pair)(i)
}

#[cfg(test)]
mod test {
    use super::{parse_pair, parse_whole, DecimalCaptures};
    use crate::grammar::{Anchor, CoordinateGrammar};

    fn captures(s: &str) -> DecimalCaptures {
        let (rest, caps) = parse_whole(s).unwrap();
        assert_eq!(rest, "");
        caps
    }

    #[test]
    fn test_signed_pair() {
        let caps = captures("43.897481, -80.051911");
        assert_eq!(caps.latitude, "43.897481");
        assert_eq!(caps.latitude_direction, None);
        assert_eq!(caps.longitude_direction, Some("-"));
        assert_eq!(caps.longitude, "80.051911");
    }

    #[test]
    fn test_hemisphere_letters_and_words() {
        let caps = captures("N 43.5 W 80.75");
        assert_eq!(caps.latitude_direction, Some("N"));
        assert_eq!(caps.longitude_direction, Some("W"));
        assert_eq!(caps.longitude, "80.75");

        let caps = captures("(52.1 north, 3.5 west)");
        assert_eq!(caps.latitude_trailing_direction, Some("north"));
        assert_eq!(caps.longitude_trailing_direction, Some("west"));

        let caps = captures("43.5° S 80.5 degrees E");
        assert_eq!(caps.latitude_trailing_direction, Some("S"));
        assert_eq!(caps.longitude_trailing_direction, Some("E"));
    }

    #[test]
    fn test_integers() {
        let caps = captures("45 120");
        assert_eq!(caps.latitude, "45");
        assert_eq!(caps.longitude, "120");

        let caps = captures("5, 7");
        assert_eq!(caps.latitude, "5");
        assert_eq!(caps.longitude, "7");
    }

    #[test]
    fn test_out_of_range() {
        assert!(parse_whole("91.0, 80.0").is_err());
        assert!(parse_whole("45.0, 181.0").is_err());
        assert!(parse_whole("123.0, 80.0").is_err());
        assert!(parse_whole("90, 180").is_ok());
    }

    #[test]
    fn test_rejects_dms() {
        assert!(parse_whole("5335N / 12155W").is_err());
        assert!(parse_whole("58147N/07720W").is_err());
        assert!(parse_whole("50 27 55 N 127 27 65 W").is_err());
    }

    #[test]
    fn test_field_names() {
        let caps = captures("S 43.5, E 80.75");
        assert_eq!(caps.field("latdir"), Some("S"));
        assert_eq!(caps.field("latitude"), Some("43.5"));
        assert_eq!(caps.field("longdir"), Some("E"));
        assert_eq!(caps.field("longdir2"), None);
        assert_eq!(caps.field("bogus"), None);
    }

    #[test]
    fn test_boundary_anchor() {
        let (rest, caps) = DecimalCaptures::parse("43.5, -80.25; more", Anchor::Boundary).unwrap();
        assert_eq!(rest, "; more");
        assert_eq!(caps.longitude, "80.25");
        assert!(DecimalCaptures::parse("43.5, -80.25; more", Anchor::Whole).is_none());
        // Trailing whitespace is consumed, leaving the next word against the match
        assert!(DecimalCaptures::parse("43.5, -80.25 is", Anchor::Boundary).is_none());
        assert!(parse_pair("43.5, -80.25x").is_ok());
    }
}
