use log::{debug, info};
use std::sync::Arc;

use super::stocks_model::{NewStock, Stock, StockUpdate};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::ValuationSettings;

/// Service for managing stocks
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
    settings: ValuationSettings,
}

impl StockService {
    /// Creates a new StockService instance
    pub fn new(
        repository: Arc<dyn StockRepositoryTrait>,
        settings: ValuationSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            repository,
            settings,
        })
    }

    /// Rejects `symbol` if another stock already uses it and uniqueness is enforced.
    fn ensure_symbol_available(&self, symbol: &str, current_id: Option<&str>) -> Result<()> {
        if !self.settings.enforce_unique_symbols {
            return Ok(());
        }
        let taken = self
            .repository
            .list_by_symbol(symbol)?
            .into_iter()
            .any(|stock| Some(stock.id.as_str()) != current_id);
        if taken {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "Stock symbol '{}' already exists",
                symbol
            ))));
        }
        Ok(())
    }
}

impl StockServiceTrait for StockService {
    fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        new_stock.validate()?;
        self.ensure_symbol_available(&new_stock.symbol, None)?;

        let stock = self.repository.create(new_stock)?;
        info!("Created stock {} with id {}", stock, stock.id);
        Ok(stock)
    }

    fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock> {
        stock_update.validate()?;
        self.ensure_symbol_available(&stock_update.symbol, Some(&stock_update.id))?;
        self.repository.update(stock_update)
    }

    fn delete_stock(&self, stock_id: &str) -> Result<()> {
        let deleted = self.repository.delete(stock_id)?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Stock {} not found",
                stock_id
            ))));
        }
        info!("Deleted stock {} with its prices and holdings", stock_id);
        Ok(())
    }

    fn get_stock(&self, stock_id: &str) -> Result<Stock> {
        self.repository.get_by_id(stock_id)
    }

    fn list_stocks(&self) -> Result<Vec<Stock>> {
        self.repository.list()
    }

    fn find_by_symbol(&self, symbol: &str) -> Result<Vec<Stock>> {
        let stocks = self.repository.list_by_symbol(symbol)?;
        debug!("Found {} stock(s) for symbol {}", stocks.len(), symbol);
        Ok(stocks)
    }
}
