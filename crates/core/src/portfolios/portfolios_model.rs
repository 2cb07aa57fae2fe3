//! Portfolio domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_NAME_LENGTH;
use crate::errors::Result;
use crate::utils::validation::require_text;

/// A named collection of holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Input model for creating a new portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl NewPortfolio {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, MAX_NAME_LENGTH)
    }
}

/// Input model for renaming a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub id: String,
    pub name: String,
}

impl PortfolioUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("id", &self.id, usize::MAX)?;
        require_text("name", &self.name, MAX_NAME_LENGTH)
    }
}
