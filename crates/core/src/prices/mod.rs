//! Price module - price observations and as-of-date price resolution.
//!
//! - [`PriceHistory`] keeps one stock's observations ordered by date and
//!   answers "price as of" queries with last-observation-carried-forward.
//! - [`PriceRepositoryTrait`] is the storage contract for observations.
//! - [`PriceService`] records prices and resolves a single stock's price
//!   through the repository.

mod price_history;
mod prices_model;
mod prices_service;
mod prices_traits;

#[cfg(test)]
mod prices_service_tests;

pub use price_history::PriceHistory;
pub use prices_model::{NewPriceObservation, PriceObservation, PriceObservationDisplay};
pub use prices_service::PriceService;
pub use prices_traits::{PriceRepositoryTrait, PriceServiceTrait};
