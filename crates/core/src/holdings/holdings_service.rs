use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

use super::holdings_model::{Holding, NewHolding, ResolvedHolding};
use super::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::portfolios::PortfolioRepositoryTrait;
use crate::prices::{PriceHistory, PriceRepositoryTrait};
use crate::settings::ValuationSettings;
use crate::stocks::{Stock, StockRepositoryTrait};
use crate::valuation::ValuationError;

/// Service for recording holdings and valuing individual lots
pub struct HoldingService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    stock_repository: Arc<dyn StockRepositoryTrait>,
    price_repository: Arc<dyn PriceRepositoryTrait>,
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    settings: ValuationSettings,
}

impl HoldingService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        stock_repository: Arc<dyn StockRepositoryTrait>,
        price_repository: Arc<dyn PriceRepositoryTrait>,
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        settings: ValuationSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            holding_repository,
            stock_repository,
            price_repository,
            portfolio_repository,
            settings,
        })
    }

    fn load_stock(&self, stock_id: &str) -> Result<(Stock, Arc<PriceHistory>)> {
        let stock = self.stock_repository.get_by_id(stock_id)?;
        let history = Arc::new(self.price_repository.history(stock_id)?);
        Ok((stock, history))
    }
}

impl HoldingServiceTrait for HoldingService {
    fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        let holding = self.holding_repository.create(new_holding)?;
        info!(
            "Added holding {} ({} shares of stock {}) to portfolio {}",
            holding.id, holding.quantity, holding.stock_id, holding.portfolio_id
        );
        Ok(holding)
    }

    fn remove_holding(&self, holding_id: &str) -> Result<()> {
        if self.holding_repository.delete(holding_id)? == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Holding {} not found",
                holding_id
            ))));
        }
        info!("Removed holding {}", holding_id);
        Ok(())
    }

    fn get_holding(&self, holding_id: &str) -> Result<Holding> {
        self.holding_repository.get_by_id(holding_id)
    }

    fn list_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
        self.portfolio_repository.get_by_id(portfolio_id)?;
        self.holding_repository.list_by_portfolio(portfolio_id)
    }

    fn list_holdings_for_stock(&self, stock_id: &str) -> Result<Vec<Holding>> {
        self.stock_repository.get_by_id(stock_id)?;
        self.holding_repository.list_by_stock(stock_id)
    }

    fn resolve_holding(&self, holding_id: &str) -> Result<ResolvedHolding> {
        let holding = self.holding_repository.get_by_id(holding_id)?;
        let (stock, history) = self.load_stock(&holding.stock_id)?;
        ResolvedHolding::new(holding, stock, history)
    }

    fn resolve_portfolio_holdings(&self, portfolio_id: &str) -> Result<Vec<ResolvedHolding>> {
        let holdings = self.list_holdings(portfolio_id)?;

        // Lots of the same stock share one loaded history.
        let mut stocks: HashMap<String, (Stock, Arc<PriceHistory>)> = HashMap::new();
        let mut resolved = Vec::with_capacity(holdings.len());
        for holding in holdings {
            if !stocks.contains_key(&holding.stock_id) {
                let loaded = self.load_stock(&holding.stock_id)?;
                stocks.insert(holding.stock_id.clone(), loaded);
            }
            let (stock, history) = &stocks[&holding.stock_id];
            resolved.push(ResolvedHolding::new(
                holding,
                stock.clone(),
                Arc::clone(history),
            )?);
        }

        debug!(
            "Resolved {} holding(s) across {} stock(s) for portfolio {}",
            resolved.len(),
            stocks.len(),
            portfolio_id
        );
        Ok(resolved)
    }

    fn holding_value_at(&self, holding_id: &str, at_date: NaiveDate) -> Result<Option<f64>> {
        let resolved = self.resolve_holding(holding_id)?;
        let value = resolved.value_at(at_date);
        if value.is_none() {
            debug!(
                "No price for {} on or before {}; holding {} has no value",
                resolved.stock, at_date, holding_id
            );
        }
        Ok(value)
    }

    fn holding_current_value(&self, holding_id: &str) -> Result<Option<f64>> {
        let today = self.settings.today()?;
        self.holding_value_at(holding_id, today)
    }

    fn require_value_at(&self, holding_id: &str, at_date: NaiveDate) -> Result<f64> {
        let resolved = self.resolve_holding(holding_id)?;
        resolved.value_at(at_date).ok_or_else(|| {
            Error::Valuation(ValuationError::PriceUnavailable {
                symbol: resolved.stock.symbol.clone(),
                date: at_date,
            })
        })
    }
}
