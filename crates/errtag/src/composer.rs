// File: src/composer.rs
// Purpose: Error tag composition over an ErrorSource

use maud::{Markup, PreEscaped};

use crate::config::Config;
use crate::errors::ErrorSource;
use crate::escape::escape_html;
use crate::options::{ErrorMethod, ErrorOptions, ErrorOverride, ErrorPrefix};
use crate::tag::content_tag;
use crate::text;

/// Renders validation error tags for one object.
///
/// A composer serves any number of renders; it never mutates the object
/// or the options it is handed. An absent object, or one that does not
/// expose errors, renders nothing.
pub struct ErrorComposer<'a> {
    object: Option<&'a dyn ErrorSource>,
    config: Config,
    wrapper: String,
}

impl<'a> ErrorComposer<'a> {
    pub fn new(object: Option<&'a dyn ErrorSource>) -> Self {
        Self::with_config(object, Config::default())
    }

    pub fn with_config(object: Option<&'a dyn ErrorSource>, config: Config) -> Self {
        Self {
            object,
            config,
            wrapper: "default".to_string(),
        }
    }

    /// Select a named wrapper from the configuration.
    pub fn using_wrapper(mut self, name: impl Into<String>) -> Self {
        self.wrapper = name.into();
        self
    }

    /// Render the error tag for an attribute, or nothing when the
    /// attribute (and its association, if any) is clean.
    pub fn error(&self, attribute: &str, options: &ErrorOptions) -> Option<Markup> {
        if matches!(options.error, Some(ErrorOverride::Suppress)) {
            return None;
        }
        let body = self.error_text(attribute, options, None)?;
        Some(self.wrap(body, options))
    }

    /// Render the full error tag: the message prefixed with the
    /// attribute's human-readable label. An explicit `error_prefix`
    /// replaces the label.
    pub fn full_error(&self, attribute: &str, options: &ErrorOptions) -> Option<Markup> {
        if options.full_error == Some(false) {
            return None;
        }
        if matches!(options.error, Some(ErrorOverride::Suppress)) {
            return None;
        }
        let label = match options.error_prefix {
            Some(_) => None,
            None => Some(self.label_for(attribute, options)),
        };
        let body = self.error_text(attribute, options, label)?;
        Some(self.wrap(body, options))
    }

    /// Render per the active wrapper: full errors when the wrapper asks
    /// for them, plain errors otherwise.
    pub fn render(&self, attribute: &str, options: &ErrorOptions) -> Option<Markup> {
        if self.config.wrapper(&self.wrapper).full_error {
            self.full_error(attribute, options)
        } else {
            self.error(attribute, options)
        }
    }

    /// Compose the escaped body text, or `None` when nothing applies.
    fn error_text(
        &self,
        attribute: &str,
        options: &ErrorOptions,
        label: Option<String>,
    ) -> Option<String> {
        let errors = self.object?.field_errors()?;

        let mut messages: Vec<String> = errors.on(attribute).to_vec();
        if let Some(association) = &options.association {
            messages.extend_from_slice(errors.on(association.error_key()));
        }
        if messages.is_empty() {
            tracing::trace!("no errors on {}, skipping error tag", attribute);
            return None;
        }

        // A custom message replaces the composed text outright
        if let Some(ErrorOverride::Message(custom)) = &options.error {
            return Some(escape_html(custom));
        }

        let joined = match options.error_method.or(self.config.error_method) {
            Some(ErrorMethod::First) => messages[0].clone(),
            Some(ErrorMethod::ToSentence) => text::to_sentence(&messages),
            None => messages.join(" "),
        };

        let mut parts: Vec<String> = Vec::new();
        if let Some(label) = label {
            parts.push(escape_html(&label));
        }
        match &options.error_prefix {
            Some(ErrorPrefix::Plain(prefix)) => parts.push(escape_html(prefix)),
            Some(ErrorPrefix::Raw(markup)) => parts.push(markup.clone()),
            None => {}
        }
        parts.push(escape_html(&joined));
        Some(parts.join(" "))
    }

    /// Label for the full-error variant.
    fn label_for(&self, attribute: &str, options: &ErrorOptions) -> String {
        match &options.association {
            Some(association) => association.human_name(),
            None => self
                .object
                .map(|object| object.human_attribute_name(attribute))
                .unwrap_or_else(|| text::humanize(attribute)),
        }
    }

    /// Wrap the body in the configured element with pass-through attrs.
    fn wrap(&self, body: String, options: &ErrorOptions) -> Markup {
        let wrapper = self.config.wrapper(&self.wrapper);
        let tag = options.error_tag.as_deref().unwrap_or(wrapper.tag.as_str());

        let mut class = wrapper.class.clone();
        let mut attrs: Vec<(String, String)> = Vec::new();
        for (name, value) in options.html_attrs() {
            if name == "class" {
                class.push(' ');
                class.push_str(value);
            } else {
                attrs.push((name.clone(), value.clone()));
            }
        }

        let mut all = vec![("class".to_string(), class)];
        all.extend(attrs);
        content_tag(tag, &all, &PreEscaped(body))
    }
}
