//! HTML links to online maps for recognized coordinates.

pub mod bing;
pub mod google;

pub use bing::{BingMapStyle, BingMapsLink};
pub use google::{GoogleMapType, GoogleMapsLink};

use crate::coordinate::Coordinate;
use serde::Serialize;

/// A coordinate recognized in text, together with the text it was written as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLink {
    pub original: String,
    pub coordinate: Coordinate,
}

impl MapLink {
    pub fn new<S: Into<String>>(original: S, coordinate: Coordinate) -> Self {
        MapLink {
            original: original.into(),
            coordinate,
        }
    }

    /// Latitude and longitude joined by `separator`.
    pub fn coordinates(&self, separator: &str) -> String {
        self.coordinate.join(separator)
    }

    /// Build an anchor element pointing at `url` with the form-encoded query `params`, labelled
    /// with the original text and titled with the original text and the coordinate.
    pub fn make_link(&self, url: &str, params: &[(&str, &str)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in params {
            query.append_pair(name, value);
        }

        let original = escape_html(&self.original);
        format!(
            "<a href=\"{}?{}\" title=\"{} ({})\">{}</a>",
            url,
            query.finish(),
            original,
            self.coordinates(", "),
            original
        )
    }
}

/// Produces the replacement text for a recognized coordinate.
pub trait Renderer {
    fn render(&self, link: &MapLink) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&MapLink) -> String,
{
    fn render(&self, link: &MapLink) -> String {
        self(link)
    }
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod test {
    use super::{escape_html, MapLink, Renderer};
    use crate::coordinate::Coordinate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn link(original: &str, lat: &str, long: &str) -> MapLink {
        MapLink::new(
            original,
            Coordinate::new(
                Decimal::from_str(lat).unwrap(),
                Decimal::from_str(long).unwrap(),
            ),
        )
    }

    #[test]
    fn test_coordinates() {
        let l = link("58147N/07720W", "58.235278", "-77.333333");
        assert_eq!(l.coordinates(","), "58.235278,-77.333333");
        assert_eq!(l.coordinates(", "), "58.235278, -77.333333");
    }

    #[test]
    fn test_make_link_encodes_query_and_escapes_text() {
        let l = link("45º10'17\"N 076º23'46\"W", "45.171389", "-76.396111");
        let html = l.make_link("http://example.com/map", &[("q", "a b"), ("x", "1/2")]);
        assert_eq!(
            html,
            "<a href=\"http://example.com/map?q=a+b&x=1%2F2\" \
             title=\"45º10'17&quot;N 076º23'46&quot;W (45.171389, -76.396111)\">\
             45º10'17&quot;N 076º23'46&quot;W</a>"
        );
    }

    #[test]
    fn test_closure_renderer() {
        let l = link("58N/077W", "58", "-77");
        let renderer = |link: &MapLink| format!("[{}]", link.coordinates(" "));
        assert_eq!(renderer.render(&l), "[58 -77]");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("58N/077W"), "58N/077W");
    }
}
