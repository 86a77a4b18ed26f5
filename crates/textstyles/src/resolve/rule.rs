//! Resolved, flattened style rules.

use indexmap::IndexMap;

use crate::style::Scalar;

/// A value in a resolved rule: a terminal scalar or a nested selector block.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Scalar(Scalar),
    Nested(ResolvedRule),
}

impl RuleValue {
    /// Returns the scalar if this is a terminal value.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            RuleValue::Scalar(scalar) => Some(scalar),
            RuleValue::Nested(_) => None,
        }
    }

    /// Returns the nested rule if this is a selector block.
    pub fn as_nested(&self) -> Option<&ResolvedRule> {
        match self {
            RuleValue::Nested(rule) => Some(rule),
            RuleValue::Scalar(_) => None,
        }
    }
}

from_scalar_types!(RuleValue);

/// The flattened output of resolving one style definition.
///
/// Keys are final property names or nested selectors, in first-write order.
/// Writing an existing key replaces its value but keeps its position, so the
/// last write wins the way a cascade does. No `extends` keys, no sequence
/// values and no null values remain.
///
/// # Example
///
/// ```rust
/// use textstyles::ResolvedRule;
///
/// let mut rule = ResolvedRule::new();
/// rule.insert("fontWeight", 700);
/// rule.insert("fontSize", "10px");
/// rule.insert("fontWeight", 400);
///
/// assert_eq!(rule.keys().collect::<Vec<_>>(), vec!["fontWeight", "fontSize"]);
/// assert_eq!(rule.text("fontWeight").as_deref(), Some("400"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRule {
    entries: IndexMap<String, RuleValue>,
}

impl ResolvedRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a key, replacing any previous value in place.
    pub fn insert<V: Into<RuleValue>>(&mut self, key: &str, value: V) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Builder form of [`insert`](ResolvedRule::insert).
    pub fn with<V: Into<RuleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Shallow merge: every entry of `other` overwrites the same key here.
    pub fn merge(&mut self, other: ResolvedRule) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    /// Drops a key, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<RuleValue> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&RuleValue> {
        self.entries.get(key)
    }

    /// Returns the textual form of a scalar entry.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)?.as_scalar().map(|scalar| scalar.to_string())
    }

    /// Returns a nested selector block.
    pub fn nested(&self, key: &str) -> Option<&ResolvedRule> {
        self.get(key)?.as_nested()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<ResolvedRule> for RuleValue {
    fn from(rule: ResolvedRule) -> Self {
        RuleValue::Nested(rule)
    }
}

/// Result of resolving a named entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The entry is emitted with this rule.
    Rule(ResolvedRule),
    /// The entry set `output: false`; it is still usable through `extends`.
    Suppressed,
}

impl Outcome {
    /// Returns the rule, or `None` when suppressed.
    pub fn into_rule(self) -> Option<ResolvedRule> {
        match self {
            Outcome::Rule(rule) => Some(rule),
            Outcome::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Outcome::Suppressed)
    }
}
