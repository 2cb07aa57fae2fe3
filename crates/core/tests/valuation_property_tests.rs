//! Property-based integration tests for price lookup and portfolio valuation.
//!
//! These tests verify that universal properties hold across generated price
//! histories and portfolios, using the `proptest` crate.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use stockfolio_core::holdings::{Holding, ResolvedHolding};
use stockfolio_core::prices::{PriceHistory, PriceObservation};
use stockfolio_core::stocks::Stock;
use stockfolio_core::valuation::valuation_calculator::{
    annualize, annualized_return, profit, total_value,
};
use stockfolio_core::valuation::ValuationError;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

/// Generates (day offset -> price) with unique days.
fn arb_prices() -> impl Strategy<Value = BTreeMap<i64, f64>> {
    prop::collection::btree_map(0i64..2000, 0.0f64..1000.0, 0..30)
}

/// Generates a lot as (stock index, quantity, prices).
fn arb_lot() -> impl Strategy<Value = (usize, u32, BTreeMap<i64, f64>)> {
    (0usize..4, 1u32..500, arb_prices())
}

fn history_for(stock_id: &str, prices: &BTreeMap<i64, f64>) -> PriceHistory {
    // Insert in reverse so construction has to sort.
    let observations = prices
        .iter()
        .rev()
        .map(|(offset, price)| PriceObservation {
            id: format!("{}-{}", stock_id, offset),
            stock_id: stock_id.to_string(),
            date: day(*offset),
            price: *price,
        })
        .collect();
    PriceHistory::from_observations(stock_id, observations).unwrap()
}

fn resolve(
    index: usize,
    stock_index: usize,
    quantity: u32,
    prices: &BTreeMap<i64, f64>,
) -> ResolvedHolding {
    let stock_id = format!("stock-{}-{}", stock_index, index);
    let stock = Stock {
        id: stock_id.clone(),
        name: format!("Stock {}", stock_index),
        symbol: format!("S{}", stock_index),
    };
    let holding = Holding {
        id: format!("holding-{}", index),
        stock_id: stock_id.clone(),
        portfolio_id: "p".to_string(),
        quantity,
        purchase_price: 1.0,
        date_purchased: base_date(),
    };
    ResolvedHolding::new(holding, stock, Arc::new(history_for(&stock_id, prices))).unwrap()
}

fn portfolio(lots: &[(usize, u32, BTreeMap<i64, f64>)]) -> Vec<ResolvedHolding> {
    lots.iter()
        .enumerate()
        .map(|(i, (stock, quantity, prices))| resolve(i, *stock, *quantity, prices))
        .collect()
}

// =============================================================================
// Price lookup
// =============================================================================

proptest! {
    #[test]
    fn prop_price_lookup_carries_last_observation_forward(
        prices in arb_prices(),
        at in 0i64..2100,
    ) {
        let history = history_for("s", &prices);
        let expected = prices.range(..=at).next_back().map(|(_, price)| *price);
        prop_assert_eq!(history.price_on(day(at)), expected);
    }

    #[test]
    fn prop_no_price_before_first_observation(prices in arb_prices()) {
        let history = history_for("s", &prices);
        if let Some(first) = history.first_date() {
            prop_assert_eq!(history.price_on(first - Duration::days(1)), None);
        } else {
            prop_assert!(history.is_empty());
        }
    }

    #[test]
    fn prop_history_is_sorted_by_date(prices in arb_prices()) {
        let history = history_for("s", &prices);
        let dates: Vec<NaiveDate> = history.iter().map(|o| o.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(dates.len(), prices.len());
    }
}

// =============================================================================
// Aggregation
// =============================================================================

proptest! {
    #[test]
    fn prop_total_value_ignores_holding_order(
        lots in prop::collection::vec(arb_lot(), 0..8),
        at in 0i64..2100,
    ) {
        let holdings = portfolio(&lots);
        let mut reversed = holdings.clone();
        reversed.reverse();

        let forward = total_value(&holdings, day(at));
        let backward = total_value(&reversed, day(at));
        prop_assert!((forward - backward).abs() <= 1e-6 * forward.abs().max(1.0));
    }

    #[test]
    fn prop_total_value_is_sum_of_priced_holdings(
        lots in prop::collection::vec(arb_lot(), 0..8),
        at in 0i64..2100,
    ) {
        let holdings = portfolio(&lots);
        let expected: f64 = holdings.iter().filter_map(|h| h.value_at(day(at))).sum();
        let total = total_value(&holdings, day(at));
        prop_assert!(total >= 0.0);
        prop_assert!((total - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn prop_profit_rejects_reversed_range(
        lots in prop::collection::vec(arb_lot(), 0..4),
        start in 1i64..2000,
        back in 1i64..500,
    ) {
        let holdings = portfolio(&lots);
        let result = profit(&holdings, day(start), day(start - back));
        let is_invalid_range = matches!(result, Err(ValuationError::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }

    #[test]
    fn prop_annualized_return_requires_increasing_range(
        lots in prop::collection::vec(arb_lot(), 0..4),
        start in 0i64..2000,
        back in 0i64..500,
    ) {
        let holdings = portfolio(&lots);
        let result = annualized_return(&holdings, day(start), day(start - back), 365.25);
        let is_invalid_range = matches!(result, Err(ValuationError::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }
}

// =============================================================================
// Annualization
// =============================================================================

proptest! {
    #[test]
    fn prop_zero_start_value_annualizes_to_zero(
        end_value in 0.0f64..1e6,
        years in 0.01f64..50.0,
    ) {
        prop_assert_eq!(annualize(0.0, end_value, years).unwrap(), 0.0);
    }

    #[test]
    fn prop_annualized_rate_compounds_back_to_end_value(
        start_value in 1.0f64..1e5,
        end_value in 1.0f64..1e5,
        years in 0.5f64..30.0,
    ) {
        let rate = annualize(start_value, end_value, years).unwrap();
        let compounded = start_value * (1.0 + rate).powf(years);
        prop_assert!((compounded - end_value).abs() <= 1e-6 * end_value);
    }
}
