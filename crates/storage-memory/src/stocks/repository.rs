use log::debug;
use std::sync::Arc;

use stockfolio_core::stocks::{NewStock, Stock, StockRepositoryTrait, StockUpdate};
use stockfolio_core::Result;

use crate::db::{assign_id, Database};
use crate::errors::StorageError;

/// Repository for managing stocks in the in-memory database
pub struct StockRepository {
    db: Arc<Database>,
}

impl StockRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl StockRepositoryTrait for StockRepository {
    fn create(&self, new_stock: NewStock) -> Result<Stock> {
        self.db.exec(|tables| {
            let id = assign_id(new_stock.id);
            if tables.stocks.contains_key(&id) {
                return Err(StorageError::Duplicate { table: "stocks", id }.into());
            }
            let stock = Stock {
                id: id.clone(),
                name: new_stock.name,
                symbol: new_stock.symbol,
            };
            tables.stocks.insert(id, stock.clone());
            Ok(stock)
        })
    }

    fn update(&self, stock_update: StockUpdate) -> Result<Stock> {
        self.db.exec(|tables| {
            let stock = tables
                .stocks
                .get_mut(&stock_update.id)
                .ok_or_else(|| StorageError::NotFound {
                    table: "stocks",
                    id: stock_update.id.clone(),
                })?;
            stock.name = stock_update.name;
            stock.symbol = stock_update.symbol;
            Ok(stock.clone())
        })
    }

    fn delete(&self, stock_id: &str) -> Result<usize> {
        self.db.exec(|tables| {
            if tables.stocks.remove(stock_id).is_none() {
                return Ok(0);
            }
            let prices = tables.prices.remove(stock_id).map_or(0, |h| h.len());
            let holdings = tables.remove_holdings_where(|h| h.stock_id == stock_id);
            debug!(
                "Deleted stock {} with {} price(s) and {} holding(s)",
                stock_id, prices, holdings
            );
            Ok(1)
        })
    }

    fn get_by_id(&self, stock_id: &str) -> Result<Stock> {
        self.db
            .read(|tables| Ok(tables.stock(stock_id)?.clone()))
    }

    fn list(&self) -> Result<Vec<Stock>> {
        self.db.read(|tables| {
            let mut stocks: Vec<Stock> = tables.stocks.values().cloned().collect();
            stocks.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            Ok(stocks)
        })
    }

    fn list_by_symbol(&self, symbol: &str) -> Result<Vec<Stock>> {
        self.db.read(|tables| {
            Ok(tables
                .stocks
                .values()
                .filter(|s| s.symbol == symbol)
                .cloned()
                .collect())
        })
    }
}
