//! Normalization of sequence-valued properties.
//!
//! Sequences never survive into a resolved rule:
//!
//! - A two-item sequence on the font-size property is a size plus line-height
//!   pair: `fontSize: ["64px", "1.2"]` writes `fontSize: 64px` and
//!   `lineHeight: 1.2` next to each other.
//! - Every other sequence is joined with `", "`, which is how comma-delimited
//!   values such as font-family stacks are written.
//!
//! Both camelCase and kebab-case property spellings are recognised; the
//! line-height key follows the spelling of the font-size key.

use super::rule::ResolvedRule;
use crate::style::{join_scalars, Scalar};

/// Returns the line-height key paired with a font-size key, if `property` is one.
pub fn line_height_key(property: &str) -> Option<&'static str> {
    match property {
        "fontSize" => Some("lineHeight"),
        "font-size" => Some("line-height"),
        _ => None,
    }
}

/// Writes a sequence-valued property into `rule`.
pub fn apply_sequence(rule: &mut ResolvedRule, property: &str, items: &[Scalar]) {
    match (line_height_key(property), items) {
        (Some(line_height), [size, leading]) => {
            rule.insert(property, size.clone());
            rule.insert(line_height, leading.clone());
        }
        _ => rule.insert(property, join_scalars(items)),
    }
}
