//! Portfolio valuation: point-in-time value, profit, and annualized return.
//!
//! - [`valuation_calculator`] holds the arithmetic over resolved holdings.
//! - [`ValuationService`] loads a portfolio's holdings and delegates to it.

mod errors;
pub mod valuation_calculator;
mod valuation_model;
mod valuation_service;
mod valuation_traits;


pub use errors::ValuationError;
pub use valuation_model::{HoldingValuation, PortfolioPerformance, PortfolioValuation};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;
