// File: examples/render_errors.rs
// Purpose: Demonstrate error tag rendering over a validated record

use errtag::{ErrorComposer, ErrorMethod, ErrorOptions, ErrorSource, FieldErrors};
use maud::PreEscaped;

struct SignupForm {
    errors: FieldErrors,
}

impl ErrorSource for SignupForm {
    fn field_errors(&self) -> Option<&FieldErrors> {
        Some(&self.errors)
    }
}

fn main() {
    let mut errors = FieldErrors::new();
    errors.add("name", "can't be blank");
    errors.add("age", "is not a number");
    errors.add("age", "must be greater than 18");

    let form = SignupForm { errors };
    let composer = ErrorComposer::new(Some(&form));

    if let Some(tag) = composer.error("name", &ErrorOptions::new()) {
        println!("name:     {}", tag.into_string());
    }

    let sentence = ErrorOptions::new().method(ErrorMethod::ToSentence);
    if let Some(tag) = composer.error("age", &sentence) {
        println!("age:      {}", tag.into_string());
    }

    let prefixed = ErrorOptions::new().prefix(PreEscaped("<b>Name</b>".to_string()));
    if let Some(tag) = composer.error("name", &prefixed) {
        println!("prefixed: {}", tag.into_string());
    }

    let first = ErrorOptions::new().method(ErrorMethod::First);
    if let Some(tag) = composer.full_error("age", &first) {
        println!("full:     {}", tag.into_string());
    }
}
