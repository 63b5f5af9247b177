//! # contact-form
//!
//! A headless contact form: four string fields (`name`, `email`, `phone`,
//! `message`), client-side validation, and a submission cycle that either
//! snapshots-and-resets the form or surfaces per-field errors. No backend,
//! no persistence, no markup — any UI layer (or a test) drives the core
//! through field updates and submit.
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_form::{ContactForm, FieldName};
//!
//! let mut form = ContactForm::new();
//! form.set(FieldName::Name, "Ada");
//! form.set(FieldName::Email, "ada@x.com");
//! form.set(FieldName::Message, "Hi");
//!
//! assert!(form.submit());
//! assert_eq!(form.submitted().unwrap().name, "Ada");
//! // The form is empty again, ready for the next submission.
//! assert_eq!(form.fields().name, "");
//! ```
//!
//! ## Architecture
//!
//! This crate sits on top of `contact-form-validation`, which provides the
//! `Validate` trait and the pure validator functions. The form crate owns
//! the field record, the rules with their error texts, and the mutable
//! screen state.

pub mod fields;
pub mod form;

// Re-export the validation surface so callers need only this crate
pub use contact_form_validation::{Validate, ValidationErrors, ValidationResult};

pub use fields::{ContactFields, FieldName, UnknownField};
pub use form::ContactForm;
