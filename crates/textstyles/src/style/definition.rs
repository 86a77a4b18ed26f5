//! Style definition types.
//!
//! A [`StyleDefinition`] is an ordered bundle of entries. Each entry is keyed by
//! a property name or a nested selector, except for two reserved keys:
//!
//! - `extends`: one name or a list of names of other definitions to compose in
//! - `output`: whether the definition is emitted (defaults to `true`)
//!
//! Reserved keys are classified on insertion, so the resolver never has to
//! inspect key strings.
//!
//! # Example
//!
//! ```rust
//! use textstyles::StyleDefinition;
//!
//! let heading = StyleDefinition::new()
//!     .extends("base")
//!     .set("fontWeight", 700)
//!     .set("fontSize", ["64px", "1.2"])
//!     .set("a", StyleDefinition::new().extends("link"));
//!
//! assert_eq!(heading.len(), 4);
//! ```

use indexmap::IndexMap;

use super::value::{PropertyValue, Scalar};

/// Reserved key naming the definitions to compose in.
pub const EXTENDS_KEY: &str = "extends";

/// Reserved key controlling emission at the top level.
pub const OUTPUT_KEY: &str = "output";

/// One entry of a style definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Names of definitions to compose in, in declared order.
    Extends(Vec<String>),
    /// Emission flag.
    Output(bool),
    /// A property or nested selector.
    Property(PropertyValue),
}

impl Entry {
    /// Classifies a key/value pair built through the programmatic API.
    ///
    /// For `extends`, a scalar is a single name and a sequence a list of names.
    /// For `output`, only a literal `false` suppresses.
    pub fn from_pair(key: &str, value: PropertyValue) -> Self {
        match key {
            EXTENDS_KEY => Entry::Extends(extends_names(value)),
            OUTPUT_KEY => Entry::Output(!matches!(
                value,
                PropertyValue::Scalar(Scalar::Bool(false))
            )),
            _ => Entry::Property(value),
        }
    }
}

fn extends_names(value: PropertyValue) -> Vec<String> {
    match value {
        PropertyValue::Scalar(Scalar::Null) => Vec::new(),
        PropertyValue::Scalar(name) => vec![name.to_string()],
        PropertyValue::Sequence(names) => names.iter().map(|name| name.to_string()).collect(),
        PropertyValue::Nested(_) => {
            tracing::warn!("ignoring nested definition used as an extends target");
            Vec::new()
        }
    }
}

/// A declarative, not yet resolved, style.
///
/// Entries keep their declaration order. Setting an existing key replaces its
/// entry without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    entries: IndexMap<String, Entry>,
}

impl StyleDefinition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key. Returns self for chaining.
    ///
    /// `extends` and `output` are recognised here too, so
    /// `set("extends", "base")` is the same as `extends("base")`.
    pub fn set<V: Into<PropertyValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, Entry::from_pair(key, value.into()));
        self
    }

    /// Extends a single definition.
    pub fn extends(self, name: &str) -> Self {
        self.extends_all([name])
    }

    /// Extends several definitions; later names override earlier ones.
    pub fn extends_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.insert(EXTENDS_KEY, Entry::Extends(names));
        self
    }

    /// Sets the emission flag.
    pub fn output(mut self, output: bool) -> Self {
        self.insert(OUTPUT_KEY, Entry::Output(output));
        self
    }

    /// Inserts a classified entry, replacing any entry under the same key.
    pub fn insert(&mut self, key: &str, entry: Entry) {
        self.entries.insert(key.to_string(), entry);
    }

    /// Returns the entry for a key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Iterates entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Returns the `extends` targets, or an empty slice.
    pub fn extends_targets(&self) -> &[String] {
        match self.entries.get(EXTENDS_KEY) {
            Some(Entry::Extends(names)) => names,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
