//! Links to Bing Maps.

use super::{MapLink, Renderer};
use serde::{Deserialize, Serialize};

pub const BING_MAPS_URL: &str = "http://bing.com/maps/default.aspx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BingMapStyle {
    Road,
    Aerial,
    Hybrid,
}

impl BingMapStyle {
    /// Value of the `style` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            BingMapStyle::Road => "r",
            BingMapStyle::Aerial => "a",
            BingMapStyle::Hybrid => "h",
        }
    }
}

impl Default for BingMapStyle {
    fn default() -> Self {
        BingMapStyle::Road
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingMapsLink {
    pub style: BingMapStyle,
}

impl BingMapsLink {
    pub fn new(style: BingMapStyle) -> Self {
        BingMapsLink { style }
    }
}

impl Renderer for BingMapsLink {
    fn render(&self, link: &MapLink) -> String {
        let center = link.coordinates("~");
        let point = format!("Point.{}_{}", link.coordinates("_"), link.original);
        link.make_link(
            BING_MAPS_URL,
            &[
                ("style", self.style.code()),
                ("cp", center.as_str()),
                ("sp", point.as_str()),
                ("v", "2"),
            ],
        )
    }
}

#[cfg(test)]
mod test {
    use super::{BingMapStyle, BingMapsLink};
    use crate::{
        coordinate::Coordinate,
        links::{MapLink, Renderer},
    };
    use rust_decimal::Decimal;

    #[test]
    fn test_road() {
        let l = MapLink::new(
            "58N/077W",
            Coordinate::new(Decimal::from(58), Decimal::from(-77)),
        );
        assert_eq!(
            BingMapsLink::new(BingMapStyle::Road).render(&l),
            "<a href=\"http://bing.com/maps/default.aspx?style=r&cp=58%7E-77\
             &sp=Point.58_-77_58N%2F077W&v=2\" title=\"58N/077W (58, -77)\">58N/077W</a>"
        );
    }

    #[test]
    fn test_aerial() {
        let l = MapLink::new(
            "58N/077W",
            Coordinate::new(Decimal::from(58), Decimal::from(-77)),
        );
        let html = BingMapsLink::new(BingMapStyle::Aerial).render(&l);
        assert!(html.contains("?style=a&"));
    }
}
