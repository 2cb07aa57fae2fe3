//! Holding repository and service traits.

use chrono::NaiveDate;

use super::holdings_model::{Holding, NewHolding, ResolvedHolding};
use crate::errors::Result;

/// Trait defining the contract for Holding repository operations.
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Creates a new holding.
    ///
    /// Fails with a foreign key violation if the stock or the portfolio does
    /// not exist.
    fn create(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Deletes a holding by its ID. Returns the number of deleted holdings.
    fn delete(&self, holding_id: &str) -> Result<usize>;

    /// Retrieves a holding by its ID.
    fn get_by_id(&self, holding_id: &str) -> Result<Holding>;

    /// Lists the holdings of a portfolio.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    /// Lists every holding of a stock across portfolios.
    fn list_by_stock(&self, stock_id: &str) -> Result<Vec<Holding>>;
}

/// Trait defining the contract for Holding service operations.
pub trait HoldingServiceTrait: Send + Sync {
    /// Records a purchase lot.
    fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Removes a purchase lot (divestment).
    fn remove_holding(&self, holding_id: &str) -> Result<()>;

    fn get_holding(&self, holding_id: &str) -> Result<Holding>;

    /// Lists the holdings of an existing portfolio.
    fn list_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    /// Lists every holding of an existing stock across portfolios.
    fn list_holdings_for_stock(&self, stock_id: &str) -> Result<Vec<Holding>>;

    /// Loads a holding with its stock and price history.
    fn resolve_holding(&self, holding_id: &str) -> Result<ResolvedHolding>;

    /// Loads every holding of a portfolio with its stock and price history.
    fn resolve_portfolio_holdings(&self, portfolio_id: &str) -> Result<Vec<ResolvedHolding>>;

    /// Value of a holding as of `at_date`, or `None` if its stock has no
    /// price on or before that date.
    fn holding_value_at(&self, holding_id: &str, at_date: NaiveDate) -> Result<Option<f64>>;

    /// Value of a holding as of today in the configured timezone.
    fn holding_current_value(&self, holding_id: &str) -> Result<Option<f64>>;

    /// Like [`holding_value_at`](Self::holding_value_at) but reports a missing
    /// price as an error.
    fn require_value_at(&self, holding_id: &str, at_date: NaiveDate) -> Result<f64>;
}
