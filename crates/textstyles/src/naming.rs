//! Selector-name derivation for emitted rules.
//!
//! Text styles are named like identifiers (`largeHeading`, `HTMLBody`) and
//! emitted as hyphenated, prefixed class selectors (`.c-large-heading`,
//! `.c-html-body`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Default prefix for component class names.
pub const DEFAULT_COMPONENT_PREFIX: &str = "c-";

static LOWER_THEN_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

static UPPER_RUN_THEN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("valid regex"));

/// Converts an identifier to hyphen-separated lowercase.
///
/// A hyphen goes between a lowercase letter or digit and a following
/// uppercase letter, and between two uppercase letters when the second one
/// starts a word; then everything is lowercased.
///
/// # Example
///
/// ```rust
/// use textstyles::naming::kebab_case;
///
/// assert_eq!(kebab_case("largeHeading"), "large-heading");
/// assert_eq!(kebab_case("HTMLBody"), "html-body");
/// assert_eq!(kebab_case("h1Title"), "h1-title");
/// assert_eq!(kebab_case("already-kebab"), "already-kebab");
/// ```
pub fn kebab_case(name: &str) -> String {
    let spaced = LOWER_THEN_UPPER.replace_all(name, "$1-$2");
    let spaced = UPPER_RUN_THEN_WORD.replace_all(&spaced, "$1-$2");
    spaced.to_lowercase()
}

/// Escapes a class name for use as a CSS identifier.
///
/// ```rust
/// use textstyles::naming::escape_class_name;
///
/// assert_eq!(escape_class_name("c-heading"), "c-heading");
/// assert_eq!(escape_class_name("hover:ellipsis"), "hover\\:ellipsis");
/// ```
pub fn escape_class_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    if cssparser::serialize_identifier(name, &mut escaped).is_err() {
        // Writing into a String cannot fail; keep the raw name regardless.
        return name.to_string();
    }
    escaped
}

/// The class name for a text style: `prefix` plus the hyphenated name.
pub fn component_class(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, kebab_case(name))
}

/// The escaped class selector for a text style.
///
/// ```rust
/// use textstyles::naming::component_selector;
///
/// assert_eq!(component_selector("c-", "largeHeading"), ".c-large-heading");
/// assert_eq!(component_selector("", "body"), ".body");
/// ```
pub fn component_selector(prefix: &str, name: &str) -> String {
    utility_selector(&component_class(prefix, name))
}

/// The escaped class selector for a class name.
pub fn utility_selector(class: &str) -> String {
    format!(".{}", escape_class_name(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_camel() {
        assert_eq!(kebab_case("largeHeading"), "large-heading");
        assert_eq!(kebab_case("extraLargeHeadingText"), "extra-large-heading-text");
    }

    #[test]
    fn test_kebab_case_acronyms() {
        assert_eq!(kebab_case("HTMLBody"), "html-body");
        assert_eq!(kebab_case("bodyHTML"), "body-html");
        assert_eq!(kebab_case("myURLParser"), "my-url-parser");
    }

    #[test]
    fn test_kebab_case_digits() {
        assert_eq!(kebab_case("h1"), "h1");
        assert_eq!(kebab_case("heading2Xl"), "heading2-xl");
    }

    #[test]
    fn test_kebab_case_plain() {
        assert_eq!(kebab_case("body"), "body");
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("Title"), "title");
    }

    #[test]
    fn test_component_class_prefix() {
        assert_eq!(component_class("c-", "largeHeading"), "c-large-heading");
        assert_eq!(component_class("", "largeHeading"), "large-heading");
        assert_eq!(component_class("type-", "body"), "type-body");
    }

    #[test]
    fn test_component_selector_escapes() {
        assert_eq!(component_selector("c-", "largeHeading"), ".c-large-heading");
        assert_eq!(component_selector("c-", "w1/2"), ".c-w1\\/2");
    }

    #[test]
    fn test_escape_leading_digit() {
        assert_eq!(escape_class_name("1up"), "\\31 up");
    }
}
