use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use stockfolio_core::prices::{
    NewPriceObservation, PriceHistory, PriceObservation, PriceRepositoryTrait,
};
use stockfolio_core::Result;

use crate::db::{assign_id, Database, Tables};
use crate::errors::StorageError;

/// Repository for price observations, stored as one ordered history per stock
pub struct PriceRepository {
    db: Arc<Database>,
}

impl PriceRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn require_stock(tables: &Tables, stock_id: &str) -> std::result::Result<(), StorageError> {
    if tables.stocks.contains_key(stock_id) {
        Ok(())
    } else {
        Err(StorageError::MissingReference {
            table: "prices",
            referenced: "stock",
            id: stock_id.to_string(),
        })
    }
}

fn history_mut<'a>(tables: &'a mut Tables, stock_id: &str) -> &'a mut PriceHistory {
    tables
        .prices
        .entry(stock_id.to_string())
        .or_insert_with(|| PriceHistory::new(stock_id))
}

impl PriceRepositoryTrait for PriceRepository {
    fn insert(&self, new_price: NewPriceObservation) -> Result<PriceObservation> {
        self.db.exec(|tables| {
            require_stock(tables, &new_price.stock_id)?;
            let observation = new_price.into_observation(assign_id(None));
            history_mut(tables, &observation.stock_id).insert(observation.clone())?;
            Ok(observation)
        })
    }

    fn upsert_many(&self, prices: &[NewPriceObservation]) -> Result<usize> {
        self.db.exec(|tables| {
            // Check every reference before writing so a bad batch changes nothing.
            for price in prices {
                require_stock(tables, &price.stock_id)?;
            }
            let mut replaced = 0;
            for price in prices {
                let observation = price.clone().into_observation(assign_id(None));
                if history_mut(tables, &price.stock_id)
                    .upsert(observation)?
                    .is_some()
                {
                    replaced += 1;
                }
            }
            debug!(
                "Upserted {} price(s), {} replaced existing dates",
                prices.len(),
                replaced
            );
            Ok(prices.len())
        })
    }

    fn delete(&self, stock_id: &str, date: NaiveDate) -> Result<usize> {
        self.db.exec(|tables| {
            let removed = tables
                .prices
                .get_mut(stock_id)
                .and_then(|history| history.remove(date));
            Ok(usize::from(removed.is_some()))
        })
    }

    fn price_on_date(&self, stock_id: &str, date: NaiveDate) -> Result<Option<PriceObservation>> {
        self.db.read(|tables| {
            Ok(tables
                .prices
                .get(stock_id)
                .and_then(|history| history.observation_on(date))
                .cloned())
        })
    }

    fn latest_before(&self, stock_id: &str, date: NaiveDate) -> Result<Option<PriceObservation>> {
        self.db.read(|tables| {
            Ok(tables
                .prices
                .get(stock_id)
                .and_then(|history| history.latest_before(date))
                .cloned())
        })
    }

    fn history(&self, stock_id: &str) -> Result<PriceHistory> {
        self.db.read(|tables| {
            Ok(tables
                .prices
                .get(stock_id)
                .cloned()
                .unwrap_or_else(|| PriceHistory::new(stock_id)))
        })
    }
}
