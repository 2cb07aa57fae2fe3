//! Stockfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for tracking stocks, their price
//! history, and the portfolios that hold them. It is storage-agnostic and
//! defines repository traits that are implemented by storage crates such as
//! `stockfolio-storage-memory`.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolios;
pub mod prices;
pub mod settings;
pub mod stocks;
pub mod utils;
pub mod valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
