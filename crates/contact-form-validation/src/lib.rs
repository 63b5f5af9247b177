//! Contact form validation core
//!
//! Pure validation functions plus the `Validate` trait and result helpers
//! shared by the form crate. Nothing here knows about any particular form;
//! callers supply the rules and the error texts.

use std::collections::HashMap;

pub mod validators;

/// Map of field name to the message for its failing rule
///
/// A field appears as a key only while it fails validation; an empty map
/// means the input is fully valid.
pub type ValidationErrors = HashMap<String, String>;

/// Trait for types that can be validated
pub trait Validate {
    /// Validates the value and returns validation errors
    ///
    /// Returns Ok(()) if valid, or Err with a map of field names to error
    /// messages. All fields are checked independently; failures do not
    /// short-circuit.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Result of validation with errors
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: ValidationErrors,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: ValidationErrors::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Convert from Result
    pub fn from_result(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(errors) => Self::failure(errors),
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field)
    }
}
