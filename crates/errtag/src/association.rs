// File: src/association.rs
// Purpose: Association reflection for secondary error lookup

use crate::text;

/// Reflection metadata for an attribute backing an association.
///
/// An attribute like `company_id` carries errors of its own, but the
/// validation engine may also record errors under the association name
/// (`company`). The reflection supplies that secondary lookup key and the
/// label used by full error tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    name: String,
    class_name: Option<String>,
}

impl Association {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), class_name: None }
    }

    /// Set the target type name, preferred for labelling.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The key association-level errors are stored under.
    pub fn error_key(&self) -> &str {
        &self.name
    }

    /// Label for full error tags: the target type name when known,
    /// otherwise the humanized association name.
    pub fn human_name(&self) -> String {
        match &self.class_name {
            Some(class_name) => text::humanize(class_name),
            None => text::humanize(&self.name),
        }
    }
}
