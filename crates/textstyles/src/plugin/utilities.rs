//! Utility rule tables.
//!
//! Two kinds of utilities are generated:
//!
//! - Fixed tables (ellipsis, hyphens, unset escapes, caps, nums, ligatures,
//!   kerning): each is a static list of class name to declarations, included
//!   when its option is on.
//! - Theme-driven tables (`textIndent`, `textShadow`): one class per token of
//!   the matching theme category.

use indexmap::IndexMap;

use super::options::PluginOptions;
use crate::naming::utility_selector;
use crate::resolve::{ResolvedRule, RuleValue};
use crate::style::join_scalars;
use crate::theme::{Theme, TokenValue};

/// Selector to rule, in registration order.
pub type RuleSet = IndexMap<String, ResolvedRule>;

type Declarations = &'static [(&'static str, &'static str)];

/// A fixed utility table: class name to declarations.
pub type UtilityTable = &'static [(&'static str, Declarations)];

pub const ELLIPSIS: UtilityTable = &[
    ("ellipsis", &[("textOverflow", "ellipsis")]),
    ("no-ellipsis", &[("textOverflow", "clip")]),
];

pub const HYPHENS: UtilityTable = &[
    ("hyphens-none", &[("hyphens", "none")]),
    ("hyphens-manual", &[("hyphens", "manual")]),
    ("hyphens-auto", &[("hyphens", "auto")]),
];

pub const TEXT_UNSET: UtilityTable = &[
    ("font-family-unset", &[("fontFamily", "inherit")]),
    ("font-weight-unset", &[("fontWeight", "inherit")]),
    ("font-style-unset", &[("fontStyle", "inherit")]),
    ("text-size-unset", &[("fontSize", "inherit")]),
    ("text-align-unset", &[("textAlign", "inherit")]),
    ("leading-unset", &[("lineHeight", "inherit")]),
    ("tracking-unset", &[("letterSpacing", "inherit")]),
    ("text-color-unset", &[("color", "inherit")]),
    ("text-transform-unset", &[("textTransform", "inherit")]),
];

pub const CAPS: UtilityTable = &[
    ("normal-caps", &[("fontVariantCaps", "normal")]),
    ("small-caps", &[("fontVariantCaps", "small-caps")]),
    ("all-small-caps", &[("fontVariantCaps", "all-small-caps")]),
    ("petite-caps", &[("fontVariantCaps", "petite-caps")]),
    ("unicase", &[("fontVariantCaps", "unicase")]),
    ("titling-caps", &[("fontVariantCaps", "titling-caps")]),
];

pub const NUMS: UtilityTable = &[
    ("normal-nums", &[("fontVariantNumeric", "normal")]),
    ("ordinal-nums", &[("fontVariantNumeric", "ordinal")]),
    ("slashed-zeros", &[("fontVariantNumeric", "slashed-zero")]),
    ("lining-nums", &[("fontVariantNumeric", "lining-nums")]),
    ("oldstyle-nums", &[("fontVariantNumeric", "oldstyle-nums")]),
    ("proportional-nums", &[("fontVariantNumeric", "proportional-nums")]),
    ("tabular-nums", &[("fontVariantNumeric", "tabular-nums")]),
    ("diagonal-fractions", &[("fontVariantNumeric", "diagonal-fractions")]),
    ("stacked-fractions", &[("fontVariantNumeric", "stacked-fractions")]),
];

pub const LIGATURES: UtilityTable = &[
    ("normal-ligatures", &[("fontVariantLigatures", "normal")]),
    ("no-ligatures", &[("fontVariantLigatures", "none")]),
    ("common-ligatures", &[("fontVariantLigatures", "common-ligatures")]),
    ("no-common-ligatures", &[("fontVariantLigatures", "no-common-ligatures")]),
    ("discretionary-ligatures", &[("fontVariantLigatures", "discretionary-ligatures")]),
    ("no-discretionary-ligatures", &[("fontVariantLigatures", "no-discretionary-ligatures")]),
    ("historical-ligatures", &[("fontVariantLigatures", "historical-ligatures")]),
    ("no-historical-ligatures", &[("fontVariantLigatures", "no-historical-ligatures")]),
    ("contextual-ligatures", &[("fontVariantLigatures", "contextual")]),
    ("no-contextual-ligatures", &[("fontVariantLigatures", "no-contextual")]),
];

pub const KERN: UtilityTable = &[(
    "kern",
    &[("fontFeatureSettings", "'kern'"), ("fontKerning", "normal")],
)];

/// A fixed utility group, gated by an option.
#[derive(Debug, Clone, Copy)]
pub struct UtilityGroup {
    /// Key used for the option and the variant configuration.
    pub key: &'static str,
    pub table: UtilityTable,
    pub enabled: fn(&PluginOptions) -> bool,
}

/// The fixed groups in registration order.
pub const FIXED_GROUPS: &[UtilityGroup] = &[
    UtilityGroup {
        key: "ellipsis",
        table: ELLIPSIS,
        enabled: |o| o.ellipsis,
    },
    UtilityGroup {
        key: "hyphens",
        table: HYPHENS,
        enabled: |o| o.hyphens,
    },
    UtilityGroup {
        key: "textUnset",
        table: TEXT_UNSET,
        enabled: |o| o.text_unset,
    },
    UtilityGroup {
        key: "caps",
        table: CAPS,
        enabled: |o| o.caps,
    },
    UtilityGroup {
        key: "nums",
        table: NUMS,
        enabled: |o| o.nums,
    },
    UtilityGroup {
        key: "ligatures",
        table: LIGATURES,
        enabled: |o| o.ligatures,
    },
    UtilityGroup {
        key: "kern",
        table: KERN,
        enabled: |o| o.kern,
    },
];

/// Expands a fixed table into escaped selectors and rules.
pub fn table_rules(table: UtilityTable) -> RuleSet {
    table
        .iter()
        .map(|(class, declarations)| {
            let rule = declarations
                .iter()
                .fold(ResolvedRule::new(), |rule, (property, value)| {
                    rule.with(property, *value)
                });
            (utility_selector(class), rule)
        })
        .collect()
}

/// `.indent-{token}` utilities from the `textIndent` theme category.
pub fn text_indent_rules(theme: &Theme) -> RuleSet {
    theme_rules(theme, "textIndent", "textIndent", |token| format!("indent-{}", token))
}

/// `.text-shadow` / `.text-shadow-{token}` utilities from the `textShadow`
/// theme category. The `default` token drops its suffix.
pub fn text_shadow_rules(theme: &Theme) -> RuleSet {
    theme_rules(theme, "textShadow", "textShadow", |token| {
        if token == "default" {
            "text-shadow".to_string()
        } else {
            format!("text-shadow-{}", token)
        }
    })
}

fn theme_rules(
    theme: &Theme,
    category: &str,
    property: &str,
    class_name: impl Fn(&str) -> String,
) -> RuleSet {
    let Some(tokens) = theme.category(category) else {
        return RuleSet::new();
    };

    tokens
        .iter()
        .map(|(token, value)| {
            let rule = ResolvedRule::new().with(property, token_rule_value(value));
            (utility_selector(&class_name(token.as_str())), rule)
        })
        .collect()
}

/// Token values become declarations: sequences are joined, maps pass through
/// as nested blocks.
fn token_rule_value(value: &TokenValue) -> RuleValue {
    match value {
        TokenValue::Scalar(scalar) => RuleValue::Scalar(scalar.clone()),
        TokenValue::Sequence(items) => join_scalars(items).into(),
        TokenValue::Map(entries) => RuleValue::Nested(entries.iter().fold(
            ResolvedRule::new(),
            |rule, (key, value)| rule.with(key, token_rule_value(value)),
        )),
    }
}
