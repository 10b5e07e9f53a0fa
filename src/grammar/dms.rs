//! Degree/minute/second coordinate pairs.
//!
//! The grammar accepts a wide range of hand-written and machine-generated notations, among them
//!
//! ```text
//! 50 27 55 N 127 27 65 W          45º10'17"N 076º23'46"W       5335N / 12155W
//! N51.33.9 W119.02.30             (4630 NORTH 5705 WEST)        43-55-00N / 080-03-07W
//! 43 degrees, 55 minutes N, 80 degrees, 3 minutes W             58147N/07720W
//! ```
//!
//! Several elements overlap: `5335` may be read as degrees `53` and minutes `35` or as degrees
//! `5` and minutes `33`. Each element therefore produces every way it can match, most preferred
//! first, and the pair is the first combination of choices (in that order) for which every later
//! element also matches. Some elements only apply depending on what earlier elements captured;
//! longitude minutes are required exactly when latitude minutes were found, for instance.

use crate::{
    alternatives,
    coordinate::{convert, Axis, Coordinate, DecimalContext, NormalizedFields},
    grammar::{Anchor, CoordinateGrammar},
    parse::{self, attempt, Branches, Input},
};
use nom::{
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1, one_of, satisfy},
    combinator::recognize,
    sequence::{pair, preceded, tuple},
};

const LATITUDE_WORDS: &[&str] = &["NORTH", "SOUTH", "N", "S"];
const LONGITUDE_WORDS: &[&str] = &["EAST", "WEST", "E", "W"];
const DEGREE_SIGNS: &[&str] = &["º", "°"];
const DEGREES_WORD: &str = " DEGREES, ";
const MINUTES_WORD: &str = " MINUTES";
const SECONDS_WORD: &str = " SECONDS ";

/// Substrings captured for one axis of a degree/minute/second pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisCaptures<'a> {
    /// Hemisphere word or letter written before the degrees.
    pub direction: Option<&'a str>,
    /// A leading `-`.
    pub sign: Option<&'a str>,
    pub degrees: Option<&'a str>,
    pub minutes: Option<&'a str>,
    pub seconds: Option<&'a str>,
    /// Fractional minutes written in the seconds position, including the leading period
    /// (`.50` in `4630.50N`).
    pub minute_fraction: Option<&'a str>,
    /// Hemisphere word or letter written after the value.
    pub trailing_direction: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DmsCaptures<'a> {
    pub latitude: AxisCaptures<'a>,
    pub longitude: AxisCaptures<'a>,
    /// The latitude degrees were followed by a degree sign, a period, a hyphen or the word
    /// "degrees". Punctuated minute and second marks are only accepted after such a separator.
    marked: bool,
    /// The latitude degrees were followed by a period, as in `N51.33.9`.
    period: bool,
}

impl<'a> DmsCaptures<'a> {
    fn axis_mut(&mut self, axis: Axis) -> &mut AxisCaptures<'a> {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }

    /// Look up a captured field by its conventional short name (`latdir`, `latdeg`, `longsec`,
    /// `latdecsec`, ...).
    pub fn field(&self, name: &str) -> Option<&'a str> {
        let (axis, field) = if let Some(field) = name.strip_prefix("lat") {
            (&self.latitude, field)
        } else if let Some(field) = name.strip_prefix("long") {
            (&self.longitude, field)
        } else {
            return None;
        };

        match field {
            "dir" => axis.direction,
            "sign" => axis.sign,
            "deg" => axis.degrees,
            "min" => axis.minutes,
            "sec" => axis.seconds,
            "decsec" => axis.minute_fraction,
            "dir2" => axis.trailing_direction,
            _ => None,
        }
    }
}

impl<'a> CoordinateGrammar<'a> for DmsCaptures<'a> {
    const NAME: &'static str = "degrees/minutes/seconds";

    fn can_parse(i: Input<'a>) -> bool {
        match i.chars().next() {
            Some(c) => c == '(' || c == '-' || c.is_ascii_digit() || "NSns".contains(c),
            None => false,
        }
    }

    fn parse(i: Input<'a>, anchor: Anchor) -> Option<(Input<'a>, Self)> {
        search(PAIR, i, DmsCaptures::default()).find(|(rest, _)| anchor.accepts(rest))
    }

    fn to_coordinate(&self, context: &DecimalContext) -> crate::Result<Coordinate> {
        convert::dms_to_decimal(&NormalizedFields::from_captures(self), context)
    }
}

/* Search */

type Step = for<'a> fn(Input<'a>, DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>>;

const PAIR: &[Step] = &[
    open_paren,
    latitude_direction,
    latitude_degrees,
    latitude_degree_separator,
    latitude_minutes_seconds,
    latitude_trailing_direction,
    pair_delimiter,
    longitude_direction,
    longitude_degrees,
    longitude_degree_separator,
    longitude_minutes_seconds,
    longitude_trailing_direction,
    close_paren,
];

/// Lazily enumerate every complete path through `steps`, in preference order.
fn search<'a>(
    steps: &'static [Step],
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Box<dyn Iterator<Item = (Input<'a>, DmsCaptures<'a>)> + 'a> {
    match steps.split_first() {
        None => Box::new(std::iter::once((i, caps))),
        Some((step, rest)) => Box::new(
            step(i, caps)
                .into_iter()
                .flat_map(move |(i, caps)| search(rest, i, caps)),
        ),
    }
}

/* Tokens */

fn digit(i: Input) -> parse::Result<char> {
    satisfy(|c| c.is_ascii_digit())(i)
}

fn digit_in<'a>(low: char, high: char) -> impl Fn(Input<'a>) -> parse::Result<'a, char> {
    satisfy(move |c| (low..=high).contains(&c))
}

/// The input after `hit` if it matched, then the input unchanged.
fn optional<'a>(hit: Option<(Input<'a>, impl Sized)>, i: Input<'a>) -> Vec<Input<'a>> {
    match hit {
        Some((rest, _)) => vec![rest, i],
        None => vec![i],
    }
}

fn optional_space(i: Input) -> Vec<Input> {
    optional(attempt(char(' '), i), i)
}

/// Case-insensitive match of any of `list` at the head of the input.
fn words<'a>(i: Input<'a>, list: &[&'static str]) -> Vec<(Input<'a>, Input<'a>)> {
    list.iter()
        .filter_map(|w| attempt(tag_no_case(*w), i))
        .collect()
}

/// A word from `list` followed by an optional space.
fn direction_words<'a>(i: Input<'a>, list: &[&'static str]) -> Vec<(Input<'a>, Input<'a>)> {
    words(i, list)
        .into_iter()
        .flat_map(|(after, word)| {
            optional_space(after)
                .into_iter()
                .map(move |rest| (rest, word))
        })
        .collect()
}

/// Record each captured text in a copy of `caps`.
fn capture<'a, F>(
    found: Vec<(Input<'a>, Input<'a>)>,
    caps: DmsCaptures<'a>,
    assign: F,
) -> Branches<'a, DmsCaptures<'a>>
where
    F: Fn(&mut DmsCaptures<'a>, &'a str),
{
    found
        .into_iter()
        .map(|(rest, text)| {
            let mut caps = caps;
            assign(&mut caps, text);
            (rest, caps)
        })
        .collect()
}

/// Separators after the latitude degrees that count as a mark, flagged when the separator is a
/// period.
fn marked_degree_separators(i: Input) -> Vec<(Input, bool)> {
    let mut rests = Vec::new();
    for before in optional_space(i) {
        for sign in DEGREE_SIGNS {
            if let Some((after, _)) = attempt(tag(*sign), before) {
                rests.extend(optional_space(after).into_iter().map(|rest| (rest, false)));
            }
        }
    }
    if let Some((rest, _)) = attempt(char('.'), i) {
        rests.push((rest, true));
    }
    if let Some((rest, _)) = attempt(char('-'), i) {
        rests.push((rest, false));
    }
    if let Some((rest, _)) = attempt(tag_no_case(DEGREES_WORD), i) {
        rests.push((rest, false));
    }
    rests
}

fn minutes(i: Input) -> Vec<(Input, Input)> {
    alternatives!(
        i,
        recognize(pair(digit_in('0', '5'), digit)),
        recognize(digit)
    )
}

fn minute_separator(i: Input, marked: bool) -> Vec<Input> {
    let mut rests = Vec::new();
    if let Some((rest, _)) = attempt(char(' '), i) {
        rests.push(rest);
    }
    if marked {
        let mut after_mark = Vec::new();
        for mark in &["'", "\""] {
            if let Some((rest, _)) = attempt(tag(*mark), i) {
                after_mark.push(rest);
            }
        }
        if let Some((rest, _)) = attempt(tag_no_case(MINUTES_WORD), i) {
            after_mark.extend(optional(attempt(char(','), rest), rest));
        }
        for rest in after_mark {
            rests.extend(optional_space(rest));
        }
    }
    rests.push(i);
    rests
}

#[derive(Clone, Copy)]
enum Seconds<'a> {
    Whole(&'a str),
    MinuteFraction(&'a str),
    Absent,
}

/// One or two digits with an optional fraction of any length, longest fraction first.
fn whole_seconds(i: Input) -> Vec<(Input, Input)> {
    let mut found = Vec::new();
    for (after, whole) in alternatives!(i, recognize(pair(digit, digit)), recognize(digit)) {
        if let Some((_, fraction)) = attempt(preceded(char('.'), digit1), after) {
            for n in (1..=fraction.len()).rev() {
                let end = whole.len() + 1 + n;
                found.push((&i[end..], &i[..end]));
            }
        }
        found.push((after, whole));
    }
    found
}

/// A period and one to three digits, longest first.
fn minute_fraction(i: Input) -> Vec<(Input, Input)> {
    match attempt(preceded(char('.'), digit1), i) {
        Some((_, digits)) => (1..=digits.len().min(3))
            .rev()
            .map(|n| (&i[n + 1..], &i[..n + 1]))
            .collect(),
        None => Vec::new(),
    }
}

fn seconds(i: Input, period: bool) -> Vec<(Input, Seconds)> {
    let mut found = Vec::new();
    let starts = if period {
        optional(attempt(char('.'), i), i)
    } else {
        vec![i]
    };
    for start in starts {
        found.extend(
            whole_seconds(start)
                .into_iter()
                .map(|(rest, text)| (rest, Seconds::Whole(text))),
        );
    }
    found.extend(
        minute_fraction(i)
            .into_iter()
            .map(|(rest, text)| (rest, Seconds::MinuteFraction(text))),
    );
    found.push((i, Seconds::Absent));
    found
}

fn second_suffix(i: Input, marked: bool) -> Vec<Input> {
    let mut rests = Vec::new();
    if marked {
        for mark in &["\"", "'"] {
            if let Some((rest, _)) = attempt(tag(*mark), i) {
                rests.push(rest);
            }
        }
        if let Some((rest, _)) = attempt(tag_no_case(SECONDS_WORD), i) {
            rests.push(rest);
        }
    }
    rests.push(i);
    rests
}

/// Minutes, a minute mark, seconds and a second mark for `axis`.
fn minutes_seconds<'a>(
    axis: Axis,
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = Vec::new();
    for (i, minute_text) in minutes(i) {
        for i in minute_separator(i, caps.marked) {
            for (i, second_text) in seconds(i, caps.period) {
                for i in second_suffix(i, caps.marked) {
                    let mut caps = caps;
                    let fields = caps.axis_mut(axis);
                    fields.minutes = Some(minute_text);
                    match second_text {
                        Seconds::Whole(text) => fields.seconds = Some(text),
                        Seconds::MinuteFraction(text) => fields.minute_fraction = Some(text),
                        Seconds::Absent => {}
                    }
                    branches.push((i, caps));
                }
            }
        }
    }
    branches
}

/* Steps */

fn open_paren<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    optional(attempt(char('('), i), i)
        .into_iter()
        .map(|rest| (rest, caps))
        .collect()
}

fn close_paren<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    optional(attempt(char(')'), i), i)
        .into_iter()
        .map(|rest| (rest, caps))
        .collect()
}

fn latitude_direction<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = capture(direction_words(i, LATITUDE_WORDS), caps, |c, t| {
        c.latitude.direction = Some(t)
    });
    branches.extend(capture(alternatives!(i, tag("-")), caps, |c, t| {
        c.latitude.sign = Some(t)
    }));
    branches.push((i, caps));
    branches
}

/// `0` to `89` as one or two digits, or `90`.
fn latitude_degrees<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    let found = alternatives!(
        i,
        recognize(pair(digit_in('0', '8'), digit)),
        recognize(digit),
        tag("90"),
    );
    capture(found, caps, |c, t| c.latitude.degrees = Some(t))
}

fn latitude_degree_separator<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = Vec::new();
    if let Some((rest, _)) = attempt(char(' '), i) {
        branches.push((rest, caps));
    }
    for (rest, period) in marked_degree_separators(i) {
        let marked = DmsCaptures {
            marked: true,
            period,
            ..caps
        };
        branches.push((rest, marked));
    }
    branches.push((i, caps));
    branches
}

fn latitude_minutes_seconds<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = minutes_seconds(Axis::Latitude, i, caps);
    branches.push((i, caps));
    branches
}

fn latitude_trailing_direction<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = Vec::new();
    for before in optional_space(i) {
        branches.extend(capture(words(before, LATITUDE_WORDS), caps, |c, t| {
            c.latitude.trailing_direction = Some(t)
        }));
        branches.push((before, caps));
    }
    branches
}

/// A space or slash with optional spaces around it, or a comma and a space.
fn pair_delimiter<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    let mut rests = Vec::new();
    for before in optional_space(i) {
        if let Some((after, _)) = attempt(one_of(" /"), before) {
            rests.extend(optional_space(after));
        }
    }
    if let Some((rest, _)) = attempt(tag(", "), i) {
        rests.push(rest);
    }
    rests.push(i);
    rests.into_iter().map(|rest| (rest, caps)).collect()
}

/// A leading longitude hemisphere is only accepted when the latitude also had one.
fn longitude_direction<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let sign = capture(alternatives!(i, tag("-")), caps, |c, t| {
        c.longitude.sign = Some(t)
    });

    if caps.latitude.direction.is_some() {
        let mut branches = capture(direction_words(i, LONGITUDE_WORDS), caps, |c, t| {
            c.longitude.direction = Some(t)
        });
        branches.extend(sign);
        branches.push((i, caps));
        branches
    } else {
        let mut branches = vec![(i, caps)];
        branches.extend(sign);
        branches
    }
}

/// `100` to `179`, `180`, or two digits with an optional leading zero.
fn longitude_degrees<'a>(i: Input<'a>, caps: DmsCaptures<'a>) -> Branches<'a, DmsCaptures<'a>> {
    let found = alternatives!(
        i,
        recognize(tuple((char('1'), digit_in('0', '7'), digit))),
        tag("180"),
        recognize(tuple((char('0'), digit, digit))),
        recognize(pair(digit, digit)),
    );
    capture(found, caps, |c, t| c.longitude.degrees = Some(t))
}

fn longitude_degree_separator<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    let mut branches = Vec::new();
    if let Some((rest, _)) = attempt(char(' '), i) {
        branches.push((rest, caps));
    }
    if caps.marked {
        branches.extend(
            marked_degree_separators(i)
                .into_iter()
                .map(|(rest, _)| (rest, caps)),
        );
    }
    branches.push((i, caps));
    branches
}

/// Required exactly when the latitude had minutes.
fn longitude_minutes_seconds<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    if caps.latitude.minutes.is_some() {
        minutes_seconds(Axis::Longitude, i, caps)
    } else {
        vec![(i, caps)]
    }
}

/// Required exactly when the latitude had a trailing hemisphere.
fn longitude_trailing_direction<'a>(
    i: Input<'a>,
    caps: DmsCaptures<'a>,
) -> Branches<'a, DmsCaptures<'a>> {
    if caps.latitude.trailing_direction.is_none() {
        return vec![(i, caps)];
    }

    let mut branches = Vec::new();
    for before in optional_space(i) {
        branches.extend(capture(words(before, LONGITUDE_WORDS), caps, |c, t| {
            c.longitude.trailing_direction = Some(t)
        }));
    }
    branches
}
