//! Stock repository and service traits.
//!
//! These traits define the contract for stock operations without any
//! storage-specific types, allowing for different storage implementations.

use super::stocks_model::{NewStock, Stock, StockUpdate};
use crate::errors::Result;

/// Trait defining the contract for Stock repository operations.
pub trait StockRepositoryTrait: Send + Sync {
    /// Creates a new stock. A missing id is generated by the implementation.
    fn create(&self, new_stock: NewStock) -> Result<Stock>;

    /// Updates the name and symbol of an existing stock.
    fn update(&self, stock_update: StockUpdate) -> Result<Stock>;

    /// Deletes a stock by its ID.
    ///
    /// Implementations must also remove the stock's price observations and
    /// every holding that references it. Returns the number of deleted stocks.
    fn delete(&self, stock_id: &str) -> Result<usize>;

    /// Retrieves a stock by its ID.
    fn get_by_id(&self, stock_id: &str) -> Result<Stock>;

    /// Lists all stocks.
    fn list(&self) -> Result<Vec<Stock>>;

    /// Lists stocks whose symbol matches exactly.
    fn list_by_symbol(&self, symbol: &str) -> Result<Vec<Stock>>;
}

/// Trait defining the contract for Stock service operations.
pub trait StockServiceTrait: Send + Sync {
    /// Creates a new stock with validation and the configured symbol policy.
    fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;

    /// Updates an existing stock with validation and the configured symbol policy.
    fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock>;

    /// Deletes a stock along with its prices and holdings.
    fn delete_stock(&self, stock_id: &str) -> Result<()>;

    /// Retrieves a stock by ID.
    fn get_stock(&self, stock_id: &str) -> Result<Stock>;

    /// Lists all stocks.
    fn list_stocks(&self) -> Result<Vec<Stock>>;

    /// Finds stocks by ticker symbol.
    fn find_by_symbol(&self, symbol: &str) -> Result<Vec<Stock>>;
}
