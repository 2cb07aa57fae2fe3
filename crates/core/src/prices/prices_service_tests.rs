//! Unit tests for the price service.

use super::*;
use crate::errors::{DatabaseError, Error, Result};
use crate::stocks::{NewStock, Stock, StockRepositoryTrait, StockUpdate};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockStockRepository {
    stocks: Vec<Stock>,
}

impl StockRepositoryTrait for MockStockRepository {
    fn create(&self, _new_stock: NewStock) -> Result<Stock> {
        unimplemented!()
    }

    fn update(&self, _stock_update: StockUpdate) -> Result<Stock> {
        unimplemented!()
    }

    fn delete(&self, _stock_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, stock_id: &str) -> Result<Stock> {
        self.stocks
            .iter()
            .find(|s| s.id == stock_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(stock_id.to_string())))
    }

    fn list(&self) -> Result<Vec<Stock>> {
        Ok(self.stocks.clone())
    }

    fn list_by_symbol(&self, symbol: &str) -> Result<Vec<Stock>> {
        Ok(self
            .stocks
            .iter()
            .filter(|s| s.symbol == symbol)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct MockPriceRepository {
    histories: Mutex<HashMap<String, PriceHistory>>,
    next_id: Mutex<u32>,
}

impl MockPriceRepository {
    fn next_id(&self) -> String {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        format!("price-{}", next_id)
    }
}

impl PriceRepositoryTrait for MockPriceRepository {
    fn insert(&self, new_price: NewPriceObservation) -> Result<PriceObservation> {
        let observation = new_price.into_observation(self.next_id());
        let mut histories = self.histories.lock().unwrap();
        histories
            .entry(observation.stock_id.clone())
            .or_insert_with(|| PriceHistory::new(observation.stock_id.clone()))
            .insert(observation.clone())?;
        Ok(observation)
    }

    fn upsert_many(&self, prices: &[NewPriceObservation]) -> Result<usize> {
        for price in prices {
            let observation = price.clone().into_observation(self.next_id());
            self.histories
                .lock()
                .unwrap()
                .entry(observation.stock_id.clone())
                .or_insert_with(|| PriceHistory::new(observation.stock_id.clone()))
                .upsert(observation)?;
        }
        Ok(prices.len())
    }

    fn delete(&self, stock_id: &str, date: NaiveDate) -> Result<usize> {
        let mut histories = self.histories.lock().unwrap();
        Ok(histories
            .get_mut(stock_id)
            .and_then(|h| h.remove(date))
            .map_or(0, |_| 1))
    }

    fn price_on_date(&self, stock_id: &str, date: NaiveDate) -> Result<Option<PriceObservation>> {
        let histories = self.histories.lock().unwrap();
        Ok(histories
            .get(stock_id)
            .and_then(|h| h.observation_on(date))
            .cloned())
    }

    fn latest_before(
        &self,
        stock_id: &str,
        date: NaiveDate,
    ) -> Result<Option<PriceObservation>> {
        let histories = self.histories.lock().unwrap();
        Ok(histories
            .get(stock_id)
            .and_then(|h| h.latest_before(date))
            .cloned())
    }

    fn history(&self, stock_id: &str) -> Result<PriceHistory> {
        let histories = self.histories.lock().unwrap();
        Ok(histories
            .get(stock_id)
            .cloned()
            .unwrap_or_else(|| PriceHistory::new(stock_id)))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service() -> PriceService {
    let stocks = MockStockRepository {
        stocks: vec![Stock {
            id: "x".to_string(),
            name: "Example Corp".to_string(),
            symbol: "X".to_string(),
        }],
    };
    PriceService::new(Arc::new(MockPriceRepository::default()), Arc::new(stocks))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_price_on_follows_fallback_rule() {
    let service = service();
    service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), 10.0))
        .unwrap();
    service
        .record_price(NewPriceObservation::new("x", date(2024, 6, 1), 12.0))
        .unwrap();

    assert_eq!(service.price_on("x", date(2024, 3, 1)).unwrap(), Some(10.0));
    assert_eq!(service.price_on("x", date(2024, 1, 1)).unwrap(), Some(10.0));
    assert_eq!(service.price_on("x", date(2024, 6, 1)).unwrap(), Some(12.0));
    assert_eq!(service.price_on("x", date(2023, 1, 1)).unwrap(), None);
}

#[test]
fn test_price_on_without_observations_is_absent() {
    let service = service();
    assert_eq!(service.price_on("x", date(2024, 1, 1)).unwrap(), None);
}

#[test]
fn test_price_on_unknown_stock_is_error() {
    let service = service();
    let err = service.price_on("missing", date(2024, 1, 1)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_record_price_rejects_same_date_twice() {
    let service = service();
    service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), 10.0))
        .unwrap();

    let err = service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), 11.0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
    assert_eq!(service.price_on("x", date(2024, 1, 1)).unwrap(), Some(10.0));
}

#[test]
fn test_record_price_validates() {
    let service = service();
    let err = service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), -5.0))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_import_prices_replaces_existing_dates() {
    let service = service();
    service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), 10.0))
        .unwrap();

    let written = service
        .import_prices(vec![
            NewPriceObservation::new("x", date(2024, 1, 1), 10.5),
            NewPriceObservation::new("x", date(2024, 1, 2), 11.0),
        ])
        .unwrap();
    assert_eq!(written, 2);

    let history = service.price_history("x").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.price_on(date(2024, 1, 1)), Some(10.5));
}

#[test]
fn test_import_prices_rejects_invalid_batch() {
    let service = service();
    let err = service
        .import_prices(vec![
            NewPriceObservation::new("x", date(2024, 1, 1), 10.0),
            NewPriceObservation::new("x", date(2024, 1, 2), f64::NAN),
        ])
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(service.price_history("x").unwrap().is_empty());
}

#[test]
fn test_delete_price() {
    let service = service();
    service
        .record_price(NewPriceObservation::new("x", date(2024, 1, 1), 10.0))
        .unwrap();

    service.delete_price("x", date(2024, 1, 1)).unwrap();
    assert_eq!(service.price_on("x", date(2024, 1, 1)).unwrap(), None);
    assert!(service
        .delete_price("x", date(2024, 1, 1))
        .unwrap_err()
        .is_not_found());
}
