//! In-memory storage for holdings.

mod repository;

pub use repository::HoldingRepository;
