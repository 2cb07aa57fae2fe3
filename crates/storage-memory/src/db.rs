//! Table storage shared by every repository.

use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use stockfolio_core::holdings::Holding;
use stockfolio_core::portfolios::Portfolio;
use stockfolio_core::prices::PriceHistory;
use stockfolio_core::stocks::Stock;
use stockfolio_core::Result;

use crate::errors::StorageError;

/// Rows of every entity, keyed by id.
///
/// Price observations are stored per stock as an ordered [`PriceHistory`],
/// which keeps the (stock, date) pair unique.
#[derive(Debug, Default)]
pub struct Tables {
    pub stocks: BTreeMap<String, Stock>,
    pub prices: HashMap<String, PriceHistory>,
    pub portfolios: BTreeMap<String, Portfolio>,
    pub holdings: BTreeMap<String, Holding>,
}

impl Tables {
    pub fn stock(&self, stock_id: &str) -> std::result::Result<&Stock, StorageError> {
        self.stocks.get(stock_id).ok_or_else(|| StorageError::NotFound {
            table: "stocks",
            id: stock_id.to_string(),
        })
    }

    pub fn portfolio(&self, portfolio_id: &str) -> std::result::Result<&Portfolio, StorageError> {
        self.portfolios
            .get(portfolio_id)
            .ok_or_else(|| StorageError::NotFound {
                table: "portfolios",
                id: portfolio_id.to_string(),
            })
    }

    /// Removes every holding matching `predicate`. Returns how many were removed.
    pub fn remove_holdings_where(&mut self, predicate: impl Fn(&Holding) -> bool) -> usize {
        let before = self.holdings.len();
        self.holdings.retain(|_, holding| !predicate(holding));
        before - self.holdings.len()
    }
}

/// In-memory database guarded by a single reader-writer lock.
///
/// Each write runs under the exclusive lock, so a multi-table change such as a
/// cascading delete is observed all at once or not at all.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    pub fn new() -> Arc<Self> {
        debug!("Creating in-memory database");
        Arc::new(Self::default())
    }

    /// Runs `f` with shared access to the tables.
    pub fn read<T>(&self, f: impl FnOnce(&Tables) -> Result<T>) -> Result<T> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        f(&tables)
    }

    /// Runs `f` with exclusive access to the tables.
    pub fn exec<T>(&self, f: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        f(&mut tables)
    }
}

/// Returns `id` or a freshly generated one.
pub(crate) fn assign_id(id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
