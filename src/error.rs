//! Errors surfaced by the public coordinate operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Neither the decimal-degree nor the degree/minute/second grammar matched the input.
    #[error("No coordinate recognized in {input:?}")]
    NoMatch { input: String },

    #[error("Invalid number in field {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("Decimal overflow during {operation}")]
    Overflow { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
