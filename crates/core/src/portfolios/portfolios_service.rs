use log::info;
use std::sync::Arc;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing portfolios
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;
        let portfolio = self.repository.create(new_portfolio)?;
        info!("Created portfolio '{}' with id {}", portfolio, portfolio.id);
        Ok(portfolio)
    }

    fn update_portfolio(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio> {
        portfolio_update.validate()?;
        self.repository.update(portfolio_update)
    }

    fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        if self.repository.delete(portfolio_id)? == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Portfolio {} not found",
                portfolio_id
            ))));
        }
        info!("Deleted portfolio {} with its holdings", portfolio_id);
        Ok(())
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository.get_by_id(portfolio_id)
    }

    fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        self.repository.list()
    }
}
