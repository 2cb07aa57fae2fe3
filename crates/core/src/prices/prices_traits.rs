//! Price storage and service traits.

use chrono::NaiveDate;

use super::price_history::PriceHistory;
use super::prices_model::{NewPriceObservation, PriceObservation};
use crate::errors::Result;

/// Storage interface for price observations.
///
/// # Method Naming Convention
///
/// - `price_on_date` - exact-date lookup
/// - `latest_before` - most recent observation strictly before a date
/// - `history` - the full ordered series for one stock
pub trait PriceRepositoryTrait: Send + Sync {
    /// Records a new observation.
    ///
    /// Fails with a unique violation if the stock already has a price on that
    /// date, and with a foreign key violation if the stock does not exist.
    fn insert(&self, new_price: NewPriceObservation) -> Result<PriceObservation>;

    /// Inserts or replaces observations matched by (stock, date).
    ///
    /// Returns the number of observations written.
    fn upsert_many(&self, prices: &[NewPriceObservation]) -> Result<usize>;

    /// Deletes the observation for a stock on a date.
    ///
    /// Returns the number of deleted observations (0 or 1).
    fn delete(&self, stock_id: &str, date: NaiveDate) -> Result<usize>;

    /// Gets the observation recorded exactly on `date`.
    fn price_on_date(&self, stock_id: &str, date: NaiveDate) -> Result<Option<PriceObservation>>;

    /// Gets the most recent observation strictly before `date`.
    fn latest_before(&self, stock_id: &str, date: NaiveDate)
        -> Result<Option<PriceObservation>>;

    /// Gets every observation for a stock, ordered by date ascending.
    fn history(&self, stock_id: &str) -> Result<PriceHistory>;
}

/// Trait defining the contract for price operations.
pub trait PriceServiceTrait: Send + Sync {
    /// Records a single price for an existing stock.
    fn record_price(&self, new_price: NewPriceObservation) -> Result<PriceObservation>;

    /// Imports a batch of prices, replacing any existing price on the same date.
    fn import_prices(&self, prices: Vec<NewPriceObservation>) -> Result<usize>;

    /// Removes the price recorded for a stock on a date.
    fn delete_price(&self, stock_id: &str, date: NaiveDate) -> Result<()>;

    /// Resolves the stock's price as of `at_date`.
    ///
    /// Returns the exact-date price if one exists, otherwise the latest price
    /// before `at_date`, otherwise `None`.
    fn price_on(&self, stock_id: &str, at_date: NaiveDate) -> Result<Option<f64>>;

    /// Loads the full ordered price history of a stock.
    fn price_history(&self, stock_id: &str) -> Result<PriceHistory>;
}
