use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::valuation_calculator;
use super::valuation_model::{PortfolioPerformance, PortfolioValuation};
use super::valuation_traits::ValuationServiceTrait;
use crate::errors::Result;
use crate::holdings::{HoldingServiceTrait, ResolvedHolding};
use crate::settings::ValuationSettings;
use crate::utils::time_utils;

/// Values portfolios from the holdings and prices held in storage.
///
/// Nothing is cached: each call reloads the portfolio's holdings.
pub struct ValuationService {
    holding_service: Arc<dyn HoldingServiceTrait>,
    settings: ValuationSettings,
}

impl ValuationService {
    /// Fails with `InvalidConfigValue` if `settings` do not validate.
    pub fn new(
        holding_service: Arc<dyn HoldingServiceTrait>,
        settings: ValuationSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            holding_service,
            settings,
        })
    }

    fn valuation_date(&self, at_date: Option<NaiveDate>) -> Result<NaiveDate> {
        match at_date {
            Some(date) => Ok(date),
            None => self.settings.today(),
        }
    }

    fn holdings(&self, portfolio_id: &str) -> Result<Vec<ResolvedHolding>> {
        self.holding_service.resolve_portfolio_holdings(portfolio_id)
    }
}

impl ValuationServiceTrait for ValuationService {
    fn total_value(&self, portfolio_id: &str, at_date: Option<NaiveDate>) -> Result<f64> {
        let at_date = self.valuation_date(at_date)?;
        let holdings = self.holdings(portfolio_id)?;
        let total = valuation_calculator::total_value(&holdings, at_date);
        debug!(
            "Portfolio {} is worth {} on {} across {} holding(s)",
            portfolio_id,
            total,
            at_date,
            holdings.len()
        );
        Ok(total)
    }

    fn valuation_on(
        &self,
        portfolio_id: &str,
        at_date: Option<NaiveDate>,
    ) -> Result<PortfolioValuation> {
        let valuation_date = self.valuation_date(at_date)?;
        let holdings = self.holdings(portfolio_id)?;
        Ok(PortfolioValuation {
            portfolio_id: portfolio_id.to_string(),
            valuation_date,
            total_value: valuation_calculator::total_value(&holdings, valuation_date),
            holdings: valuation_calculator::value_holdings(&holdings, valuation_date),
        })
    }

    fn profit(
        &self,
        portfolio_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<f64> {
        // Reject the range before loading holdings.
        valuation_calculator::ensure_ordered(start_date, end_date)?;
        let holdings = self.holdings(portfolio_id)?;
        Ok(valuation_calculator::profit(&holdings, start_date, end_date)?)
    }

    fn annualized_return(
        &self,
        portfolio_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<f64> {
        // Reject the range before loading holdings.
        valuation_calculator::ensure_increasing(start_date, end_date)?;
        let holdings = self.holdings(portfolio_id)?;
        Ok(valuation_calculator::annualized_return(
            &holdings,
            start_date,
            end_date,
            self.settings.days_per_year,
        )?)
    }

    fn performance(
        &self,
        portfolio_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PortfolioPerformance> {
        // Reject the range before loading holdings.
        valuation_calculator::ensure_increasing(start_date, end_date)?;
        let holdings = self.holdings(portfolio_id)?;

        let start_value = valuation_calculator::total_value(&holdings, start_date);
        let end_value = valuation_calculator::total_value(&holdings, end_date);
        let years = time_utils::years_between(start_date, end_date, self.settings.days_per_year);
        let annualized_return = valuation_calculator::annualize(start_value, end_value, years)?;

        Ok(PortfolioPerformance {
            portfolio_id: portfolio_id.to_string(),
            start_date,
            end_date,
            start_value,
            end_value,
            profit: end_value - start_value,
            years,
            annualized_return,
        })
    }
}
