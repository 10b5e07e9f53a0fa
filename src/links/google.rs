//! Links to Google Maps.

use super::{MapLink, Renderer};
use serde::{Deserialize, Serialize};

pub const GOOGLE_MAPS_URL: &str = "http://maps.google.com/maps";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoogleMapType {
    Map,
    Satellite,
    Hybrid,
    Terrain,
}

impl GoogleMapType {
    /// Value of the `t` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            GoogleMapType::Map => "m",
            GoogleMapType::Satellite => "k",
            GoogleMapType::Hybrid => "h",
            GoogleMapType::Terrain => "p",
        }
    }
}

impl Default for GoogleMapType {
    fn default() -> Self {
        GoogleMapType::Hybrid
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoogleMapsLink {
    pub map_type: GoogleMapType,
}

impl GoogleMapsLink {
    pub fn new(map_type: GoogleMapType) -> Self {
        GoogleMapsLink { map_type }
    }
}

impl Renderer for GoogleMapsLink {
    fn render(&self, link: &MapLink) -> String {
        let coordinates = link.coordinates(",");
        let query = format!("{} ({})", coordinates, link.original);
        link.make_link(
            GOOGLE_MAPS_URL,
            &[
                ("q", query.as_str()),
                ("ll", coordinates.as_str()),
                ("t", self.map_type.code()),
            ],
        )
    }
}
