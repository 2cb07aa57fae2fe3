use chrono::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

use super::price_history::PriceHistory;
use super::prices_model::{NewPriceObservation, PriceObservation};
use super::prices_traits::{PriceRepositoryTrait, PriceServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::stocks::StockRepositoryTrait;

/// Service for recording and resolving stock prices
pub struct PriceService {
    price_repository: Arc<dyn PriceRepositoryTrait>,
    stock_repository: Arc<dyn StockRepositoryTrait>,
}

impl PriceService {
    pub fn new(
        price_repository: Arc<dyn PriceRepositoryTrait>,
        stock_repository: Arc<dyn StockRepositoryTrait>,
    ) -> Self {
        Self {
            price_repository,
            stock_repository,
        }
    }
}

impl PriceServiceTrait for PriceService {
    fn record_price(&self, new_price: NewPriceObservation) -> Result<PriceObservation> {
        new_price.validate()?;
        let stock = self.stock_repository.get_by_id(&new_price.stock_id)?;
        let observation = self.price_repository.insert(new_price)?;
        debug!("Recorded {}", observation.display_with(&stock.symbol));
        Ok(observation)
    }

    fn import_prices(&self, prices: Vec<NewPriceObservation>) -> Result<usize> {
        for price in &prices {
            price.validate()?;
        }
        let written = self.price_repository.upsert_many(&prices)?;
        info!("Imported {} price observation(s)", written);
        Ok(written)
    }

    fn delete_price(&self, stock_id: &str, date: NaiveDate) -> Result<()> {
        if self.price_repository.delete(stock_id, date)? == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "No price for stock {} on {}",
                stock_id, date
            ))));
        }
        Ok(())
    }

    fn price_on(&self, stock_id: &str, at_date: NaiveDate) -> Result<Option<f64>> {
        // Unknown stocks are an error, not an absent price.
        self.stock_repository.get_by_id(stock_id)?;

        if let Some(exact) = self.price_repository.price_on_date(stock_id, at_date)? {
            return Ok(Some(exact.price));
        }
        let fallback = self.price_repository.latest_before(stock_id, at_date)?;
        match &fallback {
            Some(observation) => debug!(
                "No price for stock {} on {}, using {}",
                stock_id, at_date, observation.date
            ),
            None => debug!("No price for stock {} on or before {}", stock_id, at_date),
        }
        Ok(fallback.map(|o| o.price))
    }

    fn price_history(&self, stock_id: &str) -> Result<PriceHistory> {
        self.stock_repository.get_by_id(stock_id)?;
        self.price_repository.history(stock_id)
    }
}
