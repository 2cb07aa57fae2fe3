//! Price observation models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::utils::validation::{require_non_negative, require_text};

/// A recorded closing price for a stock on a calendar date.
///
/// At most one observation exists per (stock, date) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceObservation {
    pub id: String,
    pub stock_id: String,
    pub date: NaiveDate,
    pub price: f64,
}

impl PriceObservation {
    /// Formats the observation with the owning stock's symbol.
    pub fn display_with<'a>(&'a self, symbol: &'a str) -> PriceObservationDisplay<'a> {
        PriceObservationDisplay {
            observation: self,
            symbol,
        }
    }
}

/// Display adapter rendering `"{symbol} on {date}: ${price}"`.
pub struct PriceObservationDisplay<'a> {
    observation: &'a PriceObservation,
    symbol: &'a str,
}

impl fmt::Display for PriceObservationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: ${:.*}",
            self.symbol, self.observation.date, DISPLAY_DECIMAL_PRECISION, self.observation.price
        )
    }
}

/// Input model for recording a price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceObservation {
    pub stock_id: String,
    pub date: NaiveDate,
    pub price: f64,
}

impl NewPriceObservation {
    pub fn new(stock_id: impl Into<String>, date: NaiveDate, price: f64) -> Self {
        Self {
            stock_id: stock_id.into(),
            date,
            price,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text("stockId", &self.stock_id, usize::MAX)?;
        require_non_negative("price", self.price)?;
        Ok(())
    }

    /// Builds the stored observation once an id has been assigned.
    pub fn into_observation(self, id: impl Into<String>) -> PriceObservation {
        PriceObservation {
            id: id.into(),
            stock_id: self.stock_id,
            date: self.date,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_display() {
        let observation = NewPriceObservation::new(
            "s1",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            187.1549,
        )
        .into_observation("p1");
        assert_eq!(
            observation.display_with("AAPL").to_string(),
            "AAPL on 2024-01-02: $187.15"
        );
    }

    #[test]
    fn test_validation_rejects_negative_price() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(NewPriceObservation::new("s1", date, 0.0).validate().is_ok());
        assert!(NewPriceObservation::new("s1", date, -1.0).validate().is_err());
        assert!(NewPriceObservation::new("", date, 1.0).validate().is_err());
    }
}
