//! Decimal arithmetic context for coordinate conversion.

use crate::error::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept after every intermediate step of a conversion.
pub const DEFAULT_PRECISION: u32 = 9;

/// Arithmetic context: every operation result is rounded half-to-even to `precision`
/// significant digits before it feeds the next one. Published conversion tables were produced
/// under a nine-digit context, and reproducing them digit for digit depends on rounding at the
/// same points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    pub precision: u32,
}

impl Default for DecimalContext {
    fn default() -> Self {
        DecimalContext {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DecimalContext {
    pub fn new(precision: u32) -> Self {
        DecimalContext { precision }
    }

    fn round(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.precision, RoundingStrategy::MidpointNearestEven)
            .unwrap_or(value)
    }

    pub fn add(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_add(b)
            .map(|x| self.round(x))
            .ok_or(Error::Overflow {
                operation: "addition",
            })
    }

    pub fn div(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_div(b)
            .map(|x| self.round(x))
            .ok_or(Error::Overflow {
                operation: "division",
            })
    }

    /// Round `value` half-to-even to exactly `places` decimal places, padding with zeros when
    /// the value carries fewer.
    pub fn quantize(&self, value: Decimal, places: u32) -> Decimal {
        let mut value = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
        value.rescale(places);
        value
    }
}
