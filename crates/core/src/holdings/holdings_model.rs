//! Holding domain models.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::prices::PriceHistory;
use crate::stocks::Stock;
use crate::utils::time_utils;
use crate::utils::validation::{require_non_negative, require_text};

/// One discrete purchase lot of a stock within a portfolio.
///
/// A portfolio may hold the same stock through several holdings. The purchase
/// price and date are recorded for reference and play no part in valuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub stock_id: String,
    pub portfolio_id: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub date_purchased: NaiveDate,
}

impl Holding {
    /// Market value of the lot priced from `history`, or `None` when the
    /// stock has no price on or before `at_date`.
    pub fn value_with(&self, history: &PriceHistory, at_date: NaiveDate) -> Option<f64> {
        history
            .price_on(at_date)
            .map(|price| f64::from(self.quantity) * price)
    }
}

/// Input model for recording a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub stock_id: String,
    pub portfolio_id: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub date_purchased: NaiveDate,
}

impl NewHolding {
    pub fn validate(&self) -> Result<()> {
        require_text("stockId", &self.stock_id, usize::MAX)?;
        require_text("portfolioId", &self.portfolio_id, usize::MAX)?;
        if self.quantity == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity must be a positive number of shares".to_string(),
            )));
        }
        require_non_negative("purchasePrice", self.purchase_price)
    }

    /// Builds the stored holding once an id has been assigned.
    pub fn into_holding(self, id: impl Into<String>) -> Holding {
        Holding {
            id: id.into(),
            stock_id: self.stock_id,
            portfolio_id: self.portfolio_id,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            date_purchased: self.date_purchased,
        }
    }
}

/// A holding together with its stock and that stock's price history.
///
/// This is the unit the valuation code works on: the holding asks the
/// history for a price and multiplies by its quantity.
#[derive(Debug, Clone)]
pub struct ResolvedHolding {
    pub holding: Holding,
    pub stock: Stock,
    pub history: Arc<PriceHistory>,
}

impl ResolvedHolding {
    /// Bundles the parts, checking that they all refer to the same stock.
    pub fn new(holding: Holding, stock: Stock, history: Arc<PriceHistory>) -> Result<Self> {
        if holding.stock_id != stock.id || history.stock_id() != stock.id {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Holding {} references stock {} but was resolved with stock {} and history for {}",
                holding.id,
                holding.stock_id,
                stock.id,
                history.stock_id()
            ))));
        }
        Ok(Self {
            holding,
            stock,
            history,
        })
    }

    /// Price of the underlying stock as of `at_date`.
    pub fn price_on(&self, at_date: NaiveDate) -> Option<f64> {
        self.history.price_on(at_date)
    }

    /// `quantity * price_on(at_date)`; absent when the price is absent.
    pub fn value_at(&self, at_date: NaiveDate) -> Option<f64> {
        self.holding.value_with(&self.history, at_date)
    }

    /// Value as of today in the default valuation timezone.
    pub fn current_value(&self) -> Option<f64> {
        self.value_at(time_utils::valuation_date_today())
    }

    /// Value as of today in `tz`.
    pub fn current_value_in(&self, tz: Tz) -> Option<f64> {
        self.value_at(time_utils::valuation_date_today_in(tz))
    }
}

impl fmt::Display for ResolvedHolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shares of {} purchased at ${:.*}",
            self.holding.quantity,
            self.stock,
            DISPLAY_DECIMAL_PRECISION,
            self.holding.purchase_price
        )
    }
}
