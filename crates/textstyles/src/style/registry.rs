//! The table of named style definitions.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::definition::{Entry, StyleDefinition};
use super::value::PropertyValue;
use crate::error::StyleValidationError;

/// The complete universe of named text styles for one resolution pass.
///
/// Definitions reference each other by name through `extends`. The table
/// itself does not require the references to be acyclic; use
/// [`validate`](StyleTable::validate) to check up front, or let the resolver
/// report a cycle when it reaches one.
///
/// # Example
///
/// ```rust
/// use textstyles::{StyleDefinition, StyleTable};
///
/// let table = StyleTable::new()
///     .add("base", StyleDefinition::new().set("fontWeight", 700))
///     .add("heading", StyleDefinition::new().extends("base").set("fontSize", "2rem"));
///
/// assert!(table.validate().is_ok());
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    definitions: IndexMap<String, StyleDefinition>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named definition. Returns self for chaining.
    ///
    /// If a definition with the same name exists, it is replaced.
    pub fn add(mut self, name: &str, definition: StyleDefinition) -> Self {
        self.insert(name, definition);
        self
    }

    /// Inserts a named definition, replacing any existing one.
    pub fn insert(&mut self, name: &str, definition: StyleDefinition) {
        self.definitions.insert(name.to_string(), definition);
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.definitions.get(name)
    }

    /// Returns true if a definition with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Iterates definition names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Iterates definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleDefinition)> {
        self.definitions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validates every `extends` reference, including those in nested selectors.
    ///
    /// Returns an error describing the first problem found, in table order.
    /// Resolution itself tolerates dangling targets; this is a stricter check
    /// for callers that want one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textstyles::{StyleDefinition, StyleTable, StyleValidationError};
    ///
    /// let cycle = StyleTable::new()
    ///     .add("a", StyleDefinition::new().extends("b"))
    ///     .add("b", StyleDefinition::new().extends("a"));
    /// assert!(matches!(
    ///     cycle.validate(),
    ///     Err(StyleValidationError::CycleDetected { .. })
    /// ));
    ///
    /// let dangling = StyleTable::new()
    ///     .add("orphan", StyleDefinition::new().extends("nowhere"));
    /// assert!(matches!(
    ///     dangling.validate(),
    ///     Err(StyleValidationError::UnresolvedExtends { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut finished = HashSet::new();
        for name in self.definitions.keys() {
            let mut path = Vec::new();
            self.validate_from(name, &mut path, &mut finished)?;
        }
        Ok(())
    }

    /// Depth-first walk over the extends graph starting at `name`.
    ///
    /// `path` holds the names on the current route; `finished` holds names
    /// whose whole ancestry has already been checked, so shared parents are
    /// walked once.
    fn validate_from<'a>(
        &'a self,
        name: &'a str,
        path: &mut Vec<String>,
        finished: &mut HashSet<&'a str>,
    ) -> Result<(), StyleValidationError> {
        if finished.contains(name) {
            return Ok(());
        }

        if let Some(start) = path.iter().position(|seen| seen == name) {
            let mut cycle = path[start..].to_vec();
            cycle.push(name.to_string());
            return Err(StyleValidationError::CycleDetected { path: cycle });
        }

        // Existence of `name` is checked by the caller.
        let Some(definition) = self.definitions.get(name) else {
            return Ok(());
        };

        path.push(name.to_string());
        let mut targets = Vec::new();
        collect_targets(definition, &mut targets);
        for target in targets {
            if !self.definitions.contains_key(target) {
                return Err(StyleValidationError::UnresolvedExtends {
                    from: name.to_string(),
                    to: target.to_string(),
                });
            }
            self.validate_from(target, path, finished)?;
        }
        path.pop();
        finished.insert(name);

        Ok(())
    }
}

/// Gathers `extends` targets of a definition and of its nested selectors.
fn collect_targets<'a>(definition: &'a StyleDefinition, targets: &mut Vec<&'a str>) {
    for (_, entry) in definition.entries() {
        match entry {
            Entry::Extends(names) => targets.extend(names.iter().map(String::as_str)),
            Entry::Property(PropertyValue::Nested(nested)) => collect_targets(nested, targets),
            _ => {}
        }
    }
}
