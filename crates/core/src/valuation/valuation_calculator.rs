//! Valuation arithmetic over resolved holdings.
//!
//! Every function here is pure: callers load the holdings and their price
//! histories, these functions only read them.

use chrono::NaiveDate;
use log::{debug, warn};

use super::errors::ValuationError;
use super::valuation_model::HoldingValuation;
use crate::holdings::ResolvedHolding;
use crate::utils::time_utils;

/// Sum of holding values as of `at_date`.
///
/// Holdings whose stock has no price on or before `at_date` are skipped, so
/// one unpriced stock never fails the aggregate. An empty slice is worth 0.0.
pub fn total_value(holdings: &[ResolvedHolding], at_date: NaiveDate) -> f64 {
    holdings.iter().fold(0.0, |total, resolved| {
        match resolved.value_at(at_date) {
            Some(value) => total + value,
            None => {
                debug!(
                    "Missing price for {} on {}. Holding {} skipped.",
                    resolved.stock, at_date, resolved.holding.id
                );
                total
            }
        }
    })
}

/// Per-holding prices and values as of `at_date`.
pub fn value_holdings(holdings: &[ResolvedHolding], at_date: NaiveDate) -> Vec<HoldingValuation> {
    holdings
        .iter()
        .map(|resolved| {
            let price = resolved.price_on(at_date);
            HoldingValuation {
                holding_id: resolved.holding.id.clone(),
                stock_id: resolved.stock.id.clone(),
                symbol: resolved.stock.symbol.clone(),
                quantity: resolved.holding.quantity,
                price,
                value: price.map(|p| f64::from(resolved.holding.quantity) * p),
            }
        })
        .collect()
}

/// Checks that `end` does not precede `start`.
pub fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), ValuationError> {
    if end < start {
        return Err(ValuationError::InvalidRange { start, end });
    }
    Ok(())
}

/// Checks that `end` strictly follows `start`.
pub fn ensure_increasing(start: NaiveDate, end: NaiveDate) -> Result<(), ValuationError> {
    if end <= start {
        return Err(ValuationError::InvalidRange { start, end });
    }
    Ok(())
}

/// `total_value(end) - total_value(start)`. Equal dates are allowed.
pub fn profit(
    holdings: &[ResolvedHolding],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<f64, ValuationError> {
    ensure_ordered(start_date, end_date)?;
    let start_value = total_value(holdings, start_date);
    let end_value = total_value(holdings, end_date);
    Ok(end_value - start_value)
}

/// Compound annual growth rate of the portfolio between two dates.
///
/// `end_date` must strictly follow `start_date`. Elapsed years are counted as
/// `days / days_per_year`.
pub fn annualized_return(
    holdings: &[ResolvedHolding],
    start_date: NaiveDate,
    end_date: NaiveDate,
    days_per_year: f64,
) -> Result<f64, ValuationError> {
    ensure_increasing(start_date, end_date)?;
    let start_value = total_value(holdings, start_date);
    let end_value = total_value(holdings, end_date);
    let years = time_utils::years_between(start_date, end_date, days_per_year);
    annualize(start_value, end_value, years)
}

/// `(end_value / start_value) ^ (1 / years) - 1`.
///
/// Returns 0 when `start_value` is 0 or `years` is not positive. A negative
/// growth ratio has no real root and is reported as
/// [`ValuationError::UndefinedReturn`].
pub fn annualize(start_value: f64, end_value: f64, years: f64) -> Result<f64, ValuationError> {
    if start_value == 0.0 {
        return Ok(0.0);
    }
    if years <= 0.0 {
        warn!("Annualizing over {} years; returning 0", years);
        return Ok(0.0);
    }

    let ratio = end_value / start_value;
    let undefined = ValuationError::UndefinedReturn {
        start_value,
        end_value,
    };
    if ratio < 0.0 {
        return Err(undefined);
    }

    let rate = ratio.powf(1.0 / years) - 1.0;
    if !rate.is_finite() {
        return Err(undefined);
    }
    Ok(rate)
}
