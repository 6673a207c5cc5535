// File: src/escape.rs
// Purpose: HTML escaping for element text and attribute values

use std::fmt::Write;

/// Escape a string for element content or a double-quoted attribute value.
///
/// Delegates to Maud's escaper so fragments match the escaping of the
/// surrounding templates (`&`, `<`, `>`, `"`).
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Writing into a String cannot fail
    let _ = maud::Escaper::new(&mut out).write_str(input);
    out
}
