//! Portfolio repository and service traits.

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::errors::Result;

/// Trait defining the contract for Portfolio repository operations.
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Creates a new portfolio. A missing id is generated by the implementation.
    fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Updates an existing portfolio.
    fn update(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio by its ID.
    ///
    /// Implementations must also remove the portfolio's holdings.
    /// Returns the number of deleted portfolios.
    fn delete(&self, portfolio_id: &str) -> Result<usize>;

    /// Retrieves a portfolio by its ID.
    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio>;

    /// Lists all portfolios.
    fn list(&self) -> Result<Vec<Portfolio>>;
}

/// Trait defining the contract for Portfolio service operations.
pub trait PortfolioServiceTrait: Send + Sync {
    fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    fn update_portfolio(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio and its holdings.
    fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;

    fn list_portfolios(&self) -> Result<Vec<Portfolio>>;
}
