//! Valuation service traits.

use chrono::NaiveDate;

use super::valuation_model::{PortfolioPerformance, PortfolioValuation};
use crate::errors::Result;

/// Trait defining the contract for portfolio valuation.
pub trait ValuationServiceTrait: Send + Sync {
    /// Total value of the portfolio as of `at_date` (today when `None`).
    ///
    /// Holdings without a price on or before the date are skipped.
    fn total_value(&self, portfolio_id: &str, at_date: Option<NaiveDate>) -> Result<f64>;

    /// Total value with the per-holding breakdown.
    fn valuation_on(
        &self,
        portfolio_id: &str,
        at_date: Option<NaiveDate>,
    ) -> Result<PortfolioValuation>;

    /// `total_value(end_date) - total_value(start_date)`.
    ///
    /// Fails with an invalid range when `end_date` precedes `start_date`.
    fn profit(&self, portfolio_id: &str, start_date: NaiveDate, end_date: NaiveDate)
        -> Result<f64>;

    /// Compound annual growth rate between the two dates.
    ///
    /// Fails with an invalid range unless `end_date` strictly follows
    /// `start_date`. Returns 0 when the start value is 0.
    fn annualized_return(
        &self,
        portfolio_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<f64>;

    /// Start and end values, profit and annualized return in one pass.
    fn performance(
        &self,
        portfolio_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PortfolioPerformance>;
}
