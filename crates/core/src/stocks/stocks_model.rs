//! Stock domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH};
use crate::errors::Result;
use crate::utils::validation::require_text;

/// A tradable instrument identified by name and ticker symbol.
///
/// Price observations belong to a stock and are removed with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Input model for creating a new stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub symbol: String,
}

impl NewStock {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, MAX_NAME_LENGTH)?;
        require_text("symbol", &self.symbol, MAX_SYMBOL_LENGTH)?;
        Ok(())
    }
}

/// Input model for updating an existing stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

impl StockUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("id", &self.id, usize::MAX)?;
        require_text("name", &self.name, MAX_NAME_LENGTH)?;
        require_text("symbol", &self.symbol, MAX_SYMBOL_LENGTH)?;
        Ok(())
    }
}
