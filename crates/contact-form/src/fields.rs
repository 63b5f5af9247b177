// File: src/fields.rs
// Purpose: Contact form field record, field addressing, and the validation rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use contact_form_validation::{validators, Validate, ValidationErrors};

/// The four inputs of the contact form
///
/// `Default` is the empty form. `phone` is the only optional field: it may
/// stay empty, but once it has content it must match the phone pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// Current value of one field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    /// Replace the value of one field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

impl Validate for ContactFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::is_present(&self.name) {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        if !validators::has_mail_sign(&self.email) {
            errors.insert("email".to_string(), "A valid email is required".to_string());
        }
        // Phone is optional; only a non-empty value is held to the pattern
        if !self.phone.is_empty() && !validators::is_valid_phone(&self.phone) {
            errors.insert("phone".to_string(), "Invalid phone number format".to_string());
        }
        if !validators::is_present(&self.message) {
            errors.insert("message".to_string(), "Message is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Identifies one field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldName {
    /// All fields, in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    /// The wire name, as used for input names and error-map keys
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "phone" => Ok(FieldName::Phone),
            "message" => Ok(FieldName::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Error for an input name that is not a field of this form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field name: {0}")]
pub struct UnknownField(pub String);
