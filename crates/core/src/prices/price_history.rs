//! Ordered price observations for a single stock.

use chrono::NaiveDate;
use serde::Serialize;

use super::prices_model::PriceObservation;
use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// A stock's price observations, kept sorted by date with no duplicate dates.
///
/// Lookups use binary search, so "latest before" is `O(log n)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    stock_id: String,
    observations: Vec<PriceObservation>,
}

impl PriceHistory {
    /// Creates an empty history for `stock_id`.
    pub fn new(stock_id: impl Into<String>) -> Self {
        Self {
            stock_id: stock_id.into(),
            observations: Vec::new(),
        }
    }

    /// Builds a history from observations in any order.
    ///
    /// Fails if an observation belongs to another stock or if two share a date.
    pub fn from_observations(
        stock_id: impl Into<String>,
        mut observations: Vec<PriceObservation>,
    ) -> Result<Self> {
        let stock_id = stock_id.into();
        if let Some(foreign) = observations.iter().find(|o| o.stock_id != stock_id) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Price {} belongs to stock {}, not {}",
                foreign.id, foreign.stock_id, stock_id
            ))));
        }

        observations.sort_by_key(|o| o.date);
        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(duplicate_date(&stock_id, pair[1].date));
        }

        Ok(Self {
            stock_id,
            observations,
        })
    }

    pub fn stock_id(&self) -> &str {
        &self.stock_id
    }

    /// Observations ordered by date ascending.
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceObservation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Index of the first observation dated on or after `date`.
    fn lower_bound(&self, date: NaiveDate) -> usize {
        self.observations.partition_point(|o| o.date < date)
    }

    /// The observation recorded exactly on `date`.
    pub fn observation_on(&self, date: NaiveDate) -> Option<&PriceObservation> {
        self.observations
            .get(self.lower_bound(date))
            .filter(|o| o.date == date)
    }

    /// The most recent observation strictly before `date`.
    pub fn latest_before(&self, date: NaiveDate) -> Option<&PriceObservation> {
        self.lower_bound(date)
            .checked_sub(1)
            .map(|idx| &self.observations[idx])
    }

    /// The observation that prices the stock as of `date`: the exact one if
    /// present, otherwise the latest earlier one.
    pub fn resolve(&self, date: NaiveDate) -> Option<&PriceObservation> {
        self.observation_on(date)
            .or_else(|| self.latest_before(date))
    }

    /// Price as of `date`, or `None` when nothing was observed on or before it.
    pub fn price_on(&self, date: NaiveDate) -> Option<f64> {
        self.resolve(date).map(|o| o.price)
    }

    /// Inserts an observation, rejecting a second price on the same date.
    pub fn insert(&mut self, observation: PriceObservation) -> Result<()> {
        self.check_owner(&observation)?;
        let idx = self.lower_bound(observation.date);
        if self
            .observations
            .get(idx)
            .is_some_and(|o| o.date == observation.date)
        {
            return Err(duplicate_date(&self.stock_id, observation.date));
        }
        self.observations.insert(idx, observation);
        Ok(())
    }

    /// Inserts or replaces the observation for its date.
    ///
    /// Returns the replaced observation, if any. A replacement keeps the
    /// existing id.
    pub fn upsert(
        &mut self,
        mut observation: PriceObservation,
    ) -> Result<Option<PriceObservation>> {
        self.check_owner(&observation)?;
        let idx = self.lower_bound(observation.date);
        match self.observations.get_mut(idx) {
            Some(existing) if existing.date == observation.date => {
                observation.id = existing.id.clone();
                Ok(Some(std::mem::replace(existing, observation)))
            }
            _ => {
                self.observations.insert(idx, observation);
                Ok(None)
            }
        }
    }

    /// Removes the observation recorded on `date`.
    pub fn remove(&mut self, date: NaiveDate) -> Option<PriceObservation> {
        let idx = self.lower_bound(date);
        if self.observations.get(idx)?.date == date {
            Some(self.observations.remove(idx))
        } else {
            None
        }
    }

    fn check_owner(&self, observation: &PriceObservation) -> Result<()> {
        if observation.stock_id != self.stock_id {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Price {} belongs to stock {}, not {}",
                observation.id, observation.stock_id, self.stock_id
            ))));
        }
        Ok(())
    }
}

fn duplicate_date(stock_id: &str, date: NaiveDate) -> Error {
    Error::Database(DatabaseError::UniqueViolation(format!(
        "Stock {} already has a price on {}",
        stock_id, date
    )))
}
