#![forbid(unsafe_code)]

pub mod coordinate;
pub mod error;
pub mod grammar;
pub mod links;
pub mod normalize;
mod parse;
pub mod version;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use coordinate::{Coordinate, DecimalContext};
pub use error::{Error, Result};
pub use links::{MapLink, Renderer};

use grammar::{CoordinateGrammar, DecimalCaptures, DmsCaptures, RawMatch};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, trace};

/// A degree/minute/second coordinate found in text. `start` and `end` are byte offsets into the
/// normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub coordinate: Coordinate,
}

impl CoordinateMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn to_map_link(&self) -> MapLink {
        MapLink::new(self.text.clone(), self.coordinate)
    }
}

/// A coordinate found in text and the text it should be replaced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub found: CoordinateMatch,
    pub replacement: String,
}

/// Recognizes coordinates in text. The decimal context controls the intermediate precision of
/// degree/minute/second conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateParser {
    pub context: DecimalContext,
}

impl CoordinateParser {
    pub fn new(context: DecimalContext) -> Self {
        CoordinateParser { context }
    }

    /// Convert a string holding exactly one coordinate pair to signed decimal degrees. Decimal
    /// degrees are tried first, then degrees/minutes/seconds; the whole (normalized) string must
    /// match.
    pub fn retrieve_lat_long(&self, text: &str) -> Result<Coordinate> {
        let text = normalize::normalize(text);

        if let Some(coordinate) = self.convert_whole::<DecimalCaptures>(&text) {
            return coordinate;
        }
        if let Err(e) = grammar::decimal::parse_whole(&text) {
            trace!(
                "decimal degrees rejected:\n{}",
                parse::pretty_error_message(&text, e)
            );
        }

        if let Some(coordinate) = self.convert_whole::<DmsCaptures>(&text) {
            return coordinate;
        }

        debug!(input = %text, "no coordinate recognized");
        Err(Error::NoMatch { input: text })
    }

    fn convert_whole<'a, G: CoordinateGrammar<'a>>(
        &self,
        text: &'a str,
    ) -> Option<Result<Coordinate>> {
        let found: RawMatch<G> = grammar::match_whole(text)?;
        debug!(grammar = G::NAME, input = text, "matched");
        Some(found.captures.to_coordinate(&self.context))
    }

    /// Find every degree/minute/second coordinate in `text`, in order of appearance.
    pub fn find_matches(&self, text: &str) -> Result<Vec<CoordinateMatch>> {
        self.matches_in(&normalize::normalize(text))
    }

    fn matches_in(&self, normalized: &str) -> Result<Vec<CoordinateMatch>> {
        let matches = grammar::scan::<DmsCaptures>(normalized)
            .into_iter()
            .map(|found| {
                Ok(CoordinateMatch {
                    start: found.start,
                    end: found.end,
                    text: found.text.to_string(),
                    coordinate: found.captures.to_coordinate(&self.context)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = matches.len(), "found coordinates");
        Ok(matches)
    }

    /// Find every coordinate in `text` and render its replacement with `renderer`.
    pub fn get_replacements<R: Renderer + ?Sized>(
        &self,
        text: &str,
        renderer: &R,
    ) -> Result<Vec<Replacement>> {
        self.replacements_in(&normalize::normalize(text), renderer)
    }

    fn replacements_in<R: Renderer + ?Sized>(
        &self,
        normalized: &str,
        renderer: &R,
    ) -> Result<Vec<Replacement>> {
        Ok(self
            .matches_in(normalized)?
            .into_iter()
            .map(|found| Replacement {
                replacement: renderer.render(&found.to_map_link()),
                found,
            })
            .collect())
    }

    /// Replace every coordinate in `text` with the output of `renderer`. The result is built
    /// from the normalized text, so quote and prime characters outside the replaced spans are
    /// normalized as well.
    pub fn replace<R: Renderer + ?Sized>(&self, text: &str, renderer: &R) -> Result<String> {
        let normalized = normalize::normalize(text);
        let replacements = self.replacements_in(&normalized, renderer)?;

        let mut replaced = String::with_capacity(normalized.len());
        let mut last = 0;
        for r in &replacements {
            replaced.push_str(&normalized[last..r.found.start]);
            replaced.push_str(&r.replacement);
            last = r.found.end;
        }
        replaced.push_str(&normalized[last..]);

        Ok(replaced)
    }
}

/// [`CoordinateParser::retrieve_lat_long`] with the default decimal context.
pub fn retrieve_lat_long(text: &str) -> Result<Coordinate> {
    CoordinateParser::default().retrieve_lat_long(text)
}

/// [`CoordinateParser::find_matches`] with the default decimal context.
pub fn find_matches(text: &str) -> Result<Vec<CoordinateMatch>> {
    CoordinateParser::default().find_matches(text)
}

/// [`CoordinateParser::get_replacements`] with the default decimal context.
pub fn get_replacements<R: Renderer + ?Sized>(
    text: &str,
    renderer: &R,
) -> Result<Vec<Replacement>> {
    CoordinateParser::default().get_replacements(text, renderer)
}

/// [`CoordinateParser::replace`] with the default decimal context.
pub fn replace<R: Renderer + ?Sized>(text: &str, renderer: &R) -> Result<String> {
    CoordinateParser::default().replace(text, renderer)
}
