//! Shared field checks used by the `validate()` methods of input models.

use crate::errors::{Error, Result, ValidationError};

/// Checks that a text field is present and fits its column width.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    if value.chars().count() > max_len {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} cannot be longer than {} characters",
            field, max_len
        ))));
    }
    Ok(())
}

/// Checks that a monetary amount is a finite, non-negative number.
pub fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        ))));
    }
    Ok(())
}
