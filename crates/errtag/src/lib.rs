//! # errtag
//!
//! Validation error tags for server-rendered HTML forms.
//!
//! Given an object carrying field-level validation errors, an attribute
//! name, and rendering options, `errtag` produces zero or one Maud fragment
//! wrapping the attribute's error text:
//!
//! ```rust,ignore
//! use errtag::{ErrorComposer, ErrorOptions, ErrorSource, FieldErrors};
//!
//! let composer = ErrorComposer::new(Some(&user));
//! if let Some(tag) = composer.error("name", &ErrorOptions::new()) {
//!     // <span class="error">can't be blank</span>
//! }
//! ```
//!
//! Errors come from any validation engine that produces messages keyed by
//! field name (`FieldErrors` converts from `HashMap<String, Vec<String>>`).
//! Text is escaped by default; raw markup is only embedded when the caller
//! hands over a `maud::PreEscaped` value.

pub mod association;
pub mod composer;
pub mod config;
pub mod errors;
pub mod escape;
pub mod options;
pub mod tag;
pub mod text;

// Re-export Maud for callers embedding fragments in templates
pub use maud;
pub use maud::{Markup, PreEscaped};

pub use association::Association;
pub use composer::ErrorComposer;
pub use config::{Config, WrapperConfig};
pub use errors::{ErrorSource, FieldErrors};
pub use options::{ErrorMethod, ErrorOptions, ErrorOverride, ErrorPrefix};
