//! In-memory storage implementation for Stockfolio.
//!
//! This crate implements the repository traits defined in `stockfolio-core`
//! on top of a single lock-protected set of tables:
//! - [`Database`] owns the tables and hands out read and write access
//! - one repository per domain entity shares the same `Arc<Database>`
//! - referential rules (foreign keys, cascading deletes) are enforced here
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-memory (this crate)
//!            │
//!            ▼
//!     RwLock<Tables>
//! ```

pub mod db;
pub mod errors;

// Repository implementations
pub mod holdings;
pub mod portfolios;
pub mod prices;
pub mod stocks;

pub use db::Database;
pub use errors::StorageError;

pub use holdings::HoldingRepository;
pub use portfolios::PortfolioRepository;
pub use prices::PriceRepository;
pub use stocks::StockRepository;

// Re-export from stockfolio-core for convenience
pub use stockfolio_core::errors::{DatabaseError, Error, Result};
