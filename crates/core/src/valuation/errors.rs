//! Valuation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by valuation arithmetic.
///
/// A missing price inside an aggregate is not an error: the holding is
/// skipped. These variants cover what the caller must see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("Invalid date range: end date {end} must be after start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("No price for {symbol} on or before {date}")]
    PriceUnavailable { symbol: String, date: NaiveDate },

    #[error("Annualized return is undefined for start value {start_value} and end value {end_value}")]
    UndefinedReturn { start_value: f64, end_value: f64 },
}
