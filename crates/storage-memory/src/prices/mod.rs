//! In-memory storage for price observations.

mod repository;

pub use repository::PriceRepository;
