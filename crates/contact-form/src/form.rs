// File: src/form.rs
// Purpose: Form state container and the change/submit cycle

use contact_form_validation::{Validate, ValidationErrors, ValidationResult};

use crate::fields::{ContactFields, FieldName, UnknownField};

/// In-memory state for one contact form screen
///
/// Owns the in-flight field values, the errors currently on display, and
/// the last accepted submission. A UI layer feeds input changes through
/// [`ContactForm::set`] (or [`ContactForm::set_by_name`] when routing on
/// raw input names) and calls [`ContactForm::submit`] on the submit action.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: ValidationErrors,
    submitted: Option<ContactFields>,
}

impl ContactForm {
    /// Create an empty form with no errors and no submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Errors from the last rejected submission, keyed by field name
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Snapshot captured by the last accepted submission
    pub fn submitted(&self) -> Option<&ContactFields> {
        self.submitted.as_ref()
    }

    /// Update one field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("field {field} changed ({} chars)", value.chars().count());
        self.fields.set(field, value);
    }

    /// Update one field addressed by its input name
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<FieldName>()?;
        self.set(field, value);
        Ok(())
    }

    /// Validate the current values without touching displayed state
    ///
    /// Pure with respect to the form; safe to call on every keystroke.
    pub fn check(&self) -> ValidationResult {
        ValidationResult::from_result(self.fields.validate())
    }

    /// Run the submission cycle; returns true when the submission is accepted
    ///
    /// On success the current values become the submitted snapshot, the
    /// fields reset to empty and displayed errors are cleared. On failure
    /// the errors are stored for display and any previous snapshot is
    /// dropped.
    pub fn submit(&mut self) -> bool {
        match self.fields.validate() {
            Ok(()) => {
                let snapshot = std::mem::take(&mut self.fields);
                tracing::debug!("submission accepted from {}", snapshot.name);
                self.errors.clear();
                self.submitted = Some(snapshot);
                true
            }
            Err(errors) => {
                tracing::debug!("submission rejected, {} field(s) failing", errors.len());
                self.errors = errors;
                self.submitted = None;
                false
            }
        }
    }

    /// Pretty-printed JSON of the last accepted submission
    pub fn submitted_json(&self) -> Option<String> {
        self.submitted
            .as_ref()
            .map(|data| serde_json::to_string_pretty(data).expect("Failed to serialize JSON"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(FieldName::Name, "Ada");
        form.set(FieldName::Email, "ada@x.com");
        form.set(FieldName::Message, "Hi");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert_eq!(*form.fields(), ContactFields::default());
        assert!(form.errors().is_empty());
        assert!(form.submitted().is_none());
    }

    #[test]
    fn test_set_by_name() {
        let mut form = ContactForm::new();
        form.set_by_name("email", "ada@x.com").unwrap();
        assert_eq!(form.fields().email, "ada@x.com");

        let err = form.set_by_name("subject", "nope").unwrap_err();
        assert_eq!(err, UnknownField("subject".to_string()));
    }

    #[test]
    fn test_check_does_not_touch_state() {
        let mut form = ContactForm::new();
        form.set(FieldName::Email, "bad");

        let result = form.check();
        assert!(!result.is_valid);
        assert!(result.get_error("name").is_some());
        // Displayed state only changes on submit
        assert!(form.errors().is_empty());
        assert_eq!(form.fields().email, "bad");
    }

    #[test]
    fn test_submit_accepts_and_resets() {
        let mut form = filled_form();
        assert!(form.submit());

        let snapshot = form.submitted().unwrap();
        assert_eq!(snapshot.name, "Ada");
        assert_eq!(snapshot.email, "ada@x.com");
        assert_eq!(snapshot.phone, "");
        assert_eq!(snapshot.message, "Hi");

        assert_eq!(*form.fields(), ContactFields::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_rejects_and_keeps_input() {
        let mut form = ContactForm::new();
        form.set(FieldName::Email, "bad");
        form.set(FieldName::Phone, "123");

        assert!(!form.submit());
        assert_eq!(form.errors().len(), 4);
        assert!(form.submitted().is_none());
        // The user's input stays on screen for correction
        assert_eq!(form.fields().email, "bad");
        assert_eq!(form.fields().phone, "123");
    }

    #[test]
    fn test_rejected_submit_drops_previous_snapshot() {
        let mut form = filled_form();
        assert!(form.submit());
        assert!(form.submitted().is_some());

        // Next attempt fails on the now-empty form
        assert!(!form.submit());
        assert!(form.submitted().is_none());
        assert!(!form.errors().is_empty());
    }

    #[test]
    fn test_accepted_submit_clears_displayed_errors() {
        let mut form = ContactForm::new();
        assert!(!form.submit());
        assert!(!form.errors().is_empty());

        form.set(FieldName::Name, "Ada");
        form.set(FieldName::Email, "ada@x.com");
        form.set(FieldName::Message, "Hi");
        assert!(form.submit());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submitted_json() {
        let mut form = filled_form();
        assert_eq!(form.submitted_json(), None);

        assert!(form.submit());
        let json = form.submitted_json().unwrap();
        assert!(json.contains("\"name\": \"Ada\""));
        assert!(json.contains("\"email\": \"ada@x.com\""));
    }
}
