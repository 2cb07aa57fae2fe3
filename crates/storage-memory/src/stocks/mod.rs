//! In-memory storage for stocks.

mod repository;

pub use repository::StockRepository;
