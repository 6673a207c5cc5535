// File: src/errors.rs
// Purpose: Field-level error storage and the introspection contract

use std::collections::HashMap;

use crate::text;

/// Validation errors keyed by field name.
///
/// Each field keeps its messages in insertion order. The underlying layout
/// is the `HashMap<String, Vec<String>>` that derive-based validators
/// produce, so validation output converts with `From` directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self { errors: HashMap::new() }
    }

    /// Record a message for a field, preserving order within the field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Messages for a field, empty when the field has none.
    pub fn on(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        !self.on(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.errors.values().filter(|messages| !messages.is_empty()).count()
    }
}

impl From<HashMap<String, Vec<String>>> for FieldErrors {
    fn from(errors: HashMap<String, Vec<String>>) -> Self {
        Self { errors }
    }
}

/// Objects that expose validation errors for rendering.
///
/// `field_errors` returning `None` means the object does not support error
/// introspection at all; renderers treat that the same as having nothing
/// to show.
pub trait ErrorSource {
    fn field_errors(&self) -> Option<&FieldErrors>;

    /// Human-readable label for an attribute, used by full error tags.
    /// Override to supply translated labels.
    fn human_attribute_name(&self, attribute: &str) -> String {
        text::humanize(attribute)
    }
}
