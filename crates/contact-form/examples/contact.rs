// Example: Drive the contact form headlessly
// Run with: cargo run -p contact-form --example contact

use contact_form::{ContactForm, FieldName};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut form = ContactForm::new();

    // ===== First attempt: incomplete input =====

    form.set(FieldName::Name, "Ada Lovelace");
    form.set(FieldName::Email, "ada.example.com"); // missing '@'
    form.set(FieldName::Phone, "12345");

    if !form.submit() {
        println!("Submission rejected:");
        for field in FieldName::ALL {
            if let Some(message) = form.errors().get(field.as_str()) {
                println!("  {field}: {message}");
            }
        }
    }

    // ===== Correct the input and resubmit =====

    form.set(FieldName::Email, "ada@example.com");
    form.set(FieldName::Phone, "+1 123-456-7890");
    form.set(FieldName::Message, "Notes on the Analytical Engine.");

    if form.submit() {
        println!("\nSubmitted Data:");
        println!("{}", form.submitted_json().expect("snapshot exists"));
    }
}
