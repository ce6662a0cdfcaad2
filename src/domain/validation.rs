//! Field-level validation primitives shared by domain entities.
//!
//! Every check is pure and fails fast: the first violated constraint is
//! returned to the caller as a [`ValidationError`] carrying a fixed message.

use thiserror::Error;
use validator::ValidateLength;

/// A domain constraint was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human readable description of the violated constraint.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fails when `value` is absent.
pub fn not_null<T: ?Sized>(value: Option<&T>, field_name: &str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(format!("{field_name} should not be null"))),
    }
}

/// Fails when `value` is absent, empty or whitespace-only.
pub fn not_null_or_empty(value: Option<&str>, field_name: &str) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(format!(
            "{field_name} should not be null or empty"
        ))),
    }
}

/// Fails when `value` has fewer than `min_length` characters.
pub fn min_length(value: &str, min_length: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.validate_length(Some(min_length as u64), None, None) {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "{field_name} should be at least {min_length} characters long"
        )))
    }
}

/// Fails when `value` has more than `max_length` characters.
pub fn max_length(value: &str, max_length: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.validate_length(None, Some(max_length as u64), None) {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "{field_name} should be less or equal {max_length} caracters long"
        )))
    }
}
