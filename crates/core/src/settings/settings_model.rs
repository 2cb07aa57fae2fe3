use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_YEAR, DEFAULT_VALUATION_TZ};
use crate::errors::{Error, Result};
use crate::utils::time_utils;

/// Settings that control how valuations are computed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationSettings {
    /// Year length used to annualize returns.
    pub days_per_year: f64,
    /// IANA timezone used to decide what "today" is.
    pub valuation_timezone: String,
    /// When set, a second stock with an existing symbol is rejected.
    pub enforce_unique_symbols: bool,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            days_per_year: DAYS_PER_YEAR,
            valuation_timezone: DEFAULT_VALUATION_TZ.name().to_string(),
            enforce_unique_symbols: false,
        }
    }
}

impl ValuationSettings {
    /// Parses settings from a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: ValuationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading valuation settings from {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "daysPerYear must be a positive number, got {}",
                self.days_per_year
            )));
        }
        self.timezone()?;
        Ok(())
    }

    /// The parsed valuation timezone.
    pub fn timezone(&self) -> Result<Tz> {
        self.valuation_timezone.parse::<Tz>().map_err(|_| {
            Error::InvalidConfigValue(format!(
                "Unknown valuation timezone '{}'",
                self.valuation_timezone
            ))
        })
    }

    /// Today's date in the valuation timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        Ok(time_utils::valuation_date_today_in(self.timezone()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = ValuationSettings::default();
        assert_eq!(settings.days_per_year, 365.25);
        assert_eq!(settings.valuation_timezone, "UTC");
        assert_eq!(settings.timezone().unwrap(), DEFAULT_VALUATION_TZ);
        assert!(!settings.enforce_unique_symbols);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            ValuationSettings::from_json_str(r#"{"enforceUniqueSymbols": true}"#).unwrap();
        assert!(settings.enforce_unique_symbols);
        assert_eq!(settings.days_per_year, 365.25);
        assert_eq!(settings.timezone().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn test_rejects_non_positive_year() {
        let err = ValuationSettings::from_json_str(r#"{"daysPerYear": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let err = ValuationSettings::from_json_str(r#"{"valuationTimezone": "Mars/Olympus"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ValuationSettings::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"daysPerYear": 365, "valuationTimezone": "America/New_York"}}"#
        )
        .unwrap();

        let settings = ValuationSettings::from_path(file.path()).unwrap();
        assert_eq!(settings.days_per_year, 365.0);
        assert_eq!(settings.timezone().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValuationSettings::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }
}
