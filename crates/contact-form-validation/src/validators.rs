// File: src/validators.rs
// Purpose: Individual validator functions

use once_cell::sync::Lazy;
use regex::Regex;

// Accepts 1234567890, 123-456-7890, (123) 456-7890 and +1 123-456-7890.
// Separators may be whitespace, '.' or '-' and are chosen independently
// per position.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").unwrap()
});

/// Check that a value has content after trimming surrounding whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Minimal email plausibility check: the value contains an '@'
pub fn has_mail_sign(value: &str) -> bool {
    value.contains('@')
}

/// Validate phone number format against the whole string
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
