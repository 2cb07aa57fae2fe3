use log::debug;
use std::sync::Arc;

use stockfolio_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioUpdate,
};
use stockfolio_core::Result;

use crate::db::{assign_id, Database};
use crate::errors::StorageError;

/// Repository for managing portfolios in the in-memory database
pub struct PortfolioRepository {
    db: Arc<Database>,
}

impl PortfolioRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl PortfolioRepositoryTrait for PortfolioRepository {
    fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        self.db.exec(|tables| {
            let id = assign_id(new_portfolio.id);
            if tables.portfolios.contains_key(&id) {
                return Err(StorageError::Duplicate {
                    table: "portfolios",
                    id,
                }
                .into());
            }
            let portfolio = Portfolio {
                id: id.clone(),
                name: new_portfolio.name,
            };
            tables.portfolios.insert(id, portfolio.clone());
            Ok(portfolio)
        })
    }

    fn update(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio> {
        self.db.exec(|tables| {
            let portfolio = tables
                .portfolios
                .get_mut(&portfolio_update.id)
                .ok_or_else(|| StorageError::NotFound {
                    table: "portfolios",
                    id: portfolio_update.id.clone(),
                })?;
            portfolio.name = portfolio_update.name;
            Ok(portfolio.clone())
        })
    }

    fn delete(&self, portfolio_id: &str) -> Result<usize> {
        self.db.exec(|tables| {
            if tables.portfolios.remove(portfolio_id).is_none() {
                return Ok(0);
            }
            let holdings = tables.remove_holdings_where(|h| h.portfolio_id == portfolio_id);
            debug!(
                "Deleted portfolio {} with {} holding(s)",
                portfolio_id, holdings
            );
            Ok(1)
        })
    }

    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.db
            .read(|tables| Ok(tables.portfolio(portfolio_id)?.clone()))
    }

    fn list(&self) -> Result<Vec<Portfolio>> {
        self.db.read(|tables| {
            let mut portfolios: Vec<Portfolio> = tables.portfolios.values().cloned().collect();
            portfolios.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            Ok(portfolios)
        })
    }
}
