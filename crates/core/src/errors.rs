//! Core error types for the pipcalc application.
//!
//! Rate-acquisition failures never show up here: the rates crate absorbs
//! them into its static fallback, so the only hard failure a valuation
//! caller sees is an unknown currency pair.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pip valuation core.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested currency pair has no entry in the reference table,
    /// so no pip size is derivable.
    #[error("Currency pair '{0}' not found")]
    PairNotFound(String),

    /// Position sizing was asked to divide by a zero or negative factor.
    #[error("Non-positive divisor: {0}")]
    NonPositiveDivisor(String),

    /// The lot type cannot be written to the lot-size table.
    #[error("Invalid lot type: {0}")]
    InvalidLotType(String),

    /// The lot-size table could not be updated.
    #[error("Lot size table unavailable: {0}")]
    LotTable(String),
}
