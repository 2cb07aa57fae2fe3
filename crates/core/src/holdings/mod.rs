//! Holdings module - purchase lots and their valuation.

mod holdings_model;
mod holdings_service;
mod holdings_traits;


pub use holdings_model::{Holding, NewHolding, ResolvedHolding};
pub use holdings_service::HoldingService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
