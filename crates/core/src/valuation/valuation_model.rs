//! Portfolio valuation domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value of a single holding on a valuation date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub holding_id: String,
    pub stock_id: String,
    pub symbol: String,
    pub quantity: u32,
    /// Price as of the valuation date; `None` if the stock had no price yet.
    pub price: Option<f64>,
    pub value: Option<f64>,
}

/// Portfolio value on a date with the per-holding breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub portfolio_id: String,
    pub valuation_date: NaiveDate,
    /// Sum of the priced holdings; unpriced holdings are excluded.
    pub total_value: f64,
    pub holdings: Vec<HoldingValuation>,
}

impl PortfolioValuation {
    /// Holdings left out of `total_value` for lack of a price.
    pub fn unpriced_holdings(&self) -> impl Iterator<Item = &HoldingValuation> {
        self.holdings.iter().filter(|h| h.value.is_none())
    }
}

/// Portfolio performance between two dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    pub portfolio_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_value: f64,
    pub end_value: f64,
    pub profit: f64,
    pub years: f64,
    pub annualized_return: f64,
}
