// File: src/options.rs
// Purpose: Typed render options for error tags

use maud::Markup;
use serde::{Deserialize, Serialize};

use crate::association::Association;

/// How multiple messages for one attribute are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMethod {
    /// Only the first message.
    First,
    /// Natural-language list ("a, b, and c").
    ToSentence,
}

/// Caller override for error rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOverride {
    /// Render nothing, even when the attribute has errors.
    Suppress,
    /// Render normally.
    Force,
    /// Replace the composed text when the attribute has errors. A clean
    /// attribute still renders nothing.
    Message(String),
}

impl From<bool> for ErrorOverride {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Force
        } else {
            Self::Suppress
        }
    }
}

impl From<&str> for ErrorOverride {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorOverride {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

/// Text rendered ahead of the error message.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPrefix {
    /// Escaped on render.
    Plain(String),
    /// Embedded verbatim; construct from `maud::PreEscaped`.
    Raw(String),
}

impl From<&str> for ErrorPrefix {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for ErrorPrefix {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<Markup> for ErrorPrefix {
    fn from(markup: Markup) -> Self {
        Self::Raw(markup.into_string())
    }
}

/// Options for one error tag render.
///
/// The composer treats the value as read-only, so one instance can be
/// reused across renders. Configuration lives in typed fields and can
/// never leak into the wrapper's HTML attributes; only values added with
/// [`attr`](Self::attr) and [`class`](Self::class) are passed through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorOptions {
    pub(crate) error: Option<ErrorOverride>,
    pub(crate) full_error: Option<bool>,
    pub(crate) error_tag: Option<String>,
    pub(crate) error_prefix: Option<ErrorPrefix>,
    pub(crate) error_method: Option<ErrorMethod>,
    pub(crate) association: Option<Association>,
    html: Vec<(String, String)>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `false` suppresses the tag, `true` forces the normal path, a
    /// string becomes the custom message.
    pub fn error(mut self, value: impl Into<ErrorOverride>) -> Self {
        self.error = Some(value.into());
        self
    }

    /// Toggle the full-error variant; `false` suppresses it entirely.
    pub fn full_error(mut self, enabled: bool) -> Self {
        self.full_error = Some(enabled);
        self
    }

    /// Wrapper tag name, overriding the configured wrapper.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.error_tag = Some(tag.into());
        self
    }

    /// Text prepended to the message, separated by a single space.
    /// Plain strings are escaped; pass `maud::PreEscaped` for raw markup.
    pub fn prefix(mut self, prefix: impl Into<ErrorPrefix>) -> Self {
        self.error_prefix = Some(prefix.into());
        self
    }

    /// Joining strategy for this render, overriding the configured one.
    pub fn method(mut self, method: ErrorMethod) -> Self {
        self.error_method = Some(method);
        self
    }

    /// Also look up errors stored under the association's name.
    pub fn association(mut self, association: Association) -> Self {
        self.association = Some(association);
        self
    }

    /// Pass-through HTML attribute for the wrapper element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.push((name.into(), value.into()));
        self
    }

    /// Extra class, merged after the wrapper's error class.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Pass-through attributes in insertion order.
    pub fn html_attrs(&self) -> &[(String, String)] {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::PreEscaped;

    #[test]
    fn test_bool_becomes_suppress_or_force() {
        assert_eq!(ErrorOverride::from(false), ErrorOverride::Suppress);
        assert_eq!(ErrorOverride::from(true), ErrorOverride::Force);
    }

    #[test]
    fn test_string_becomes_custom_message() {
        let options = ErrorOptions::new().error("name is taken");
        assert_eq!(options.error, Some(ErrorOverride::Message("name is taken".to_string())));
    }

    #[test]
    fn test_plain_prefix_from_str() {
        let options = ErrorOptions::new().prefix("<b>Name</b>");
        assert_eq!(options.error_prefix, Some(ErrorPrefix::Plain("<b>Name</b>".to_string())));
    }

    #[test]
    fn test_raw_prefix_from_pre_escaped() {
        let options = ErrorOptions::new().prefix(PreEscaped("<b>Name</b>".to_string()));
        assert_eq!(options.error_prefix, Some(ErrorPrefix::Raw("<b>Name</b>".to_string())));
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let options = ErrorOptions::new().attr("id", "error").class("yay");
        assert_eq!(
            options.html_attrs(),
            [
                ("id".to_string(), "error".to_string()),
                ("class".to_string(), "yay".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_method_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Probe {
            method: ErrorMethod,
        }
        let probe: Probe = toml::from_str(r#"method = "to_sentence""#).unwrap();
        assert_eq!(probe.method, ErrorMethod::ToSentence);
    }
}
