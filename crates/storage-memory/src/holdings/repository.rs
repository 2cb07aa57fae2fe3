use std::sync::Arc;

use stockfolio_core::holdings::{Holding, HoldingRepositoryTrait, NewHolding};
use stockfolio_core::Result;

use crate::db::{assign_id, Database};
use crate::errors::StorageError;

/// Repository for purchase lots
pub struct HoldingRepository {
    db: Arc<Database>,
}

impl HoldingRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn list_where(&self, predicate: impl Fn(&Holding) -> bool) -> Result<Vec<Holding>> {
        self.db.read(|tables| {
            let mut holdings: Vec<Holding> = tables
                .holdings
                .values()
                .filter(|h| predicate(h))
                .cloned()
                .collect();
            holdings.sort_by(|a, b| {
                a.date_purchased
                    .cmp(&b.date_purchased)
                    .then_with(|| a.id.cmp(&b.id))
            });
            Ok(holdings)
        })
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    fn create(&self, new_holding: NewHolding) -> Result<Holding> {
        self.db.exec(|tables| {
            if !tables.stocks.contains_key(&new_holding.stock_id) {
                return Err(StorageError::MissingReference {
                    table: "holdings",
                    referenced: "stock",
                    id: new_holding.stock_id,
                }
                .into());
            }
            if !tables.portfolios.contains_key(&new_holding.portfolio_id) {
                return Err(StorageError::MissingReference {
                    table: "holdings",
                    referenced: "portfolio",
                    id: new_holding.portfolio_id,
                }
                .into());
            }

            let id = assign_id(new_holding.id.clone());
            if tables.holdings.contains_key(&id) {
                return Err(StorageError::Duplicate {
                    table: "holdings",
                    id,
                }
                .into());
            }
            let holding = new_holding.into_holding(id.clone());
            tables.holdings.insert(id, holding.clone());
            Ok(holding)
        })
    }

    fn delete(&self, holding_id: &str) -> Result<usize> {
        self.db
            .exec(|tables| Ok(usize::from(tables.holdings.remove(holding_id).is_some())))
    }

    fn get_by_id(&self, holding_id: &str) -> Result<Holding> {
        self.db.read(|tables| {
            tables.holdings.get(holding_id).cloned().ok_or_else(|| {
                StorageError::NotFound {
                    table: "holdings",
                    id: holding_id.to_string(),
                }
                .into()
            })
        })
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
        self.list_where(|h| h.portfolio_id == portfolio_id)
    }

    fn list_by_stock(&self, stock_id: &str) -> Result<Vec<Holding>> {
        self.list_where(|h| h.stock_id == stock_id)
    }
}
