//! Grammars recognizing coordinate pairs in text.
//!
//! Two grammars are provided: [`decimal`] for signed decimal degrees (`43.897481, -80.051911`)
//! and [`dms`] for degree/minute/second notations (`45º10'17"N 076º23'46"W`). Both run over
//! text that has already been passed through [`crate::normalize::normalize`].

pub mod decimal;
pub mod dms;
mod scan;

pub use decimal::DecimalCaptures;
pub use dms::{AxisCaptures, DmsCaptures};
pub use scan::scan;

use crate::{
    coordinate::{Coordinate, DecimalContext},
    parse::Input,
};
use std::ops::Range;

/// Where a grammar match is allowed to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The match must consume the entire input.
    Whole,
    /// The match must end at the end of the input or before a character that cannot continue a
    /// word, so that a coordinate is never cut out of the middle of a longer token.
    Boundary,
}

impl Anchor {
    /// Returns `true` if a match leaving `rest` unconsumed satisfies this anchor.
    pub fn accepts(self, rest: Input) -> bool {
        match self {
            Anchor::Whole => rest.is_empty(),
            Anchor::Boundary => rest.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        }
    }
}

pub trait CoordinateGrammar<'a>: Sized {
    /// Name of the grammar, for diagnostics.
    const NAME: &'static str;

    /// Returns `true` if a match could begin at the head of the input. Otherwise, returns
    /// `false`.
    fn can_parse(i: Input<'a>) -> bool;

    /// Match a coordinate pair at the head of the input, ending wherever `anchor` allows.
    /// Returns the unconsumed input and the captured fields.
    fn parse(i: Input<'a>, anchor: Anchor) -> Option<(Input<'a>, Self)>;

    /// Convert the captured fields into a signed decimal coordinate.
    fn to_coordinate(&self, context: &DecimalContext) -> crate::Result<Coordinate>;
}

/// A grammar match within a larger string. `start` and `end` are byte offsets into the string
/// the grammar was applied to, and `text` is the matched slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a, C> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub captures: C,
}

impl<'a, C> RawMatch<'a, C> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Apply grammar `G` to the whole of `text`.
pub fn match_whole<'a, G: CoordinateGrammar<'a>>(text: &'a str) -> Option<RawMatch<'a, G>> {
    if !G::can_parse(text) {
        return None;
    }

    G::parse(text, Anchor::Whole).map(|(_, captures)| RawMatch {
        start: 0,
        end: text.len(),
        text,
        captures,
    })
}

#[cfg(test)]
mod test {
    use super::{match_whole, Anchor, DecimalCaptures, DmsCaptures};

    #[test]
    fn test_anchor() {
        assert!(Anchor::Whole.accepts(""));
        assert!(!Anchor::Whole.accepts(" "));
        assert!(Anchor::Boundary.accepts(""));
        assert!(Anchor::Boundary.accepts(" and more"));
        assert!(Anchor::Boundary.accepts(", 58147N"));
        assert!(!Anchor::Boundary.accepts("abc"));
        assert!(!Anchor::Boundary.accepts("7"));
    }

    #[test]
    fn test_match_whole() {
        let m = match_whole::<DmsCaptures>("58147N/07720W").unwrap();
        assert_eq!(m.span(), 0..13);
        assert_eq!(m.text, "58147N/07720W");

        assert!(match_whole::<DecimalCaptures>("58147N/07720W").is_none());
        assert!(match_whole::<DmsCaptures>("58147N/07720W and more").is_none());
        assert!(match_whole::<DmsCaptures>("").is_none());
    }
}
