// File: src/text.rs
// Purpose: Attribute-name humanization and sentence joining

use once_cell::sync::Lazy;
use regex::Regex;

// Underscore or whitespace runs collapse to a single space
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s]+").unwrap());

/// Derive a human-readable label from an attribute name.
///
/// Strips a trailing `_id`, collapses separator runs into spaces, and
/// capitalizes the first character: `company_id` becomes `Company`,
/// `first_name` becomes `First name`.
pub fn humanize(attribute: &str) -> String {
    let base = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = SEPARATOR_RUN.replace_all(base, " ");
    let spaced = spaced.trim();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Join messages into a natural-language list.
///
/// Two items join with `" and "` alone; three or more separate with commas
/// and close with `", and "`.
pub fn to_sentence(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}
