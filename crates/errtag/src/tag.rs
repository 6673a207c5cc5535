// File: src/tag.rs
// Purpose: Wrapper element construction

use maud::{Markup, PreEscaped};

use crate::escape::escape_html;

/// Build `<name ...>body</name>` with escaped attribute values.
///
/// Attributes render in the order given. `body` is already markup and is
/// embedded verbatim.
pub fn content_tag(name: &str, attrs: &[(String, String)], body: &Markup) -> Markup {
    let rendered: String = attrs
        .iter()
        .map(|(attr, value)| format!(r#" {}="{}""#, attr, escape_html(value)))
        .collect();
    PreEscaped(format!("<{}{}>{}</{}>", name, rendered, body.0, name))
}
