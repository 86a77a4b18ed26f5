//! The recursive text-style resolver.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::normalize::apply_sequence;
use super::rule::{Outcome, ResolvedRule, RuleValue};
use crate::error::ResolveError;
use crate::style::{Entry, PropertyValue, Scalar, StyleDefinition, StyleTable};

/// Where `extends` entries are applied relative to a definition's own keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtendsOrder {
    /// At the position the `extends` key appears. Keys declared before it can
    /// be overridden by the parents; keys declared after it override them.
    #[default]
    InPlace,
    /// Before every other key, so the definition's own keys always win.
    First,
}

/// A resolved definition together with its emission flag.
#[derive(Debug, Clone)]
struct Resolution {
    rule: ResolvedRule,
    output: bool,
}

/// Every definition of a table, resolved without stopping at failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableResolution {
    /// Emitted rules in table order; suppressed definitions are left out.
    pub rules: IndexMap<String, ResolvedRule>,
    /// Names that failed, with their errors, in table order.
    pub failures: IndexMap<String, ResolveError>,
}

impl TableResolution {
    /// True when no definition failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves named definitions of one [`StyleTable`].
///
/// A resolver is one resolution pass: the table is borrowed immutably and
/// each name's result is cached, so a parent extended by many children is
/// resolved once. Only successful results are cached; a name that fails
/// (unknown, or part of a cycle) leaves no trace that could affect other names.
///
/// # Example
///
/// ```rust
/// use textstyles::{Outcome, Resolver, StyleDefinition, StyleTable};
///
/// let table = StyleTable::new()
///     .add("A", StyleDefinition::new().set("fontWeight", 700))
///     .add("B", StyleDefinition::new().extends("A").set("fontSize", "10px"));
///
/// let mut resolver = Resolver::new(&table);
/// let rule = resolver.resolve("B").unwrap().into_rule().unwrap();
///
/// assert_eq!(rule.text("fontWeight").as_deref(), Some("700"));
/// assert_eq!(rule.text("fontSize").as_deref(), Some("10px"));
/// ```
#[derive(Debug)]
pub struct Resolver<'a> {
    table: &'a StyleTable,
    order: ExtendsOrder,
    cache: HashMap<String, Resolution>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `table` with in-place `extends` handling.
    pub fn new(table: &'a StyleTable) -> Self {
        Self {
            table,
            order: ExtendsOrder::default(),
            cache: HashMap::new(),
        }
    }

    /// Sets where `extends` entries are applied.
    pub fn with_extends_order(mut self, order: ExtendsOrder) -> Self {
        self.order = order;
        self.cache.clear();
        self
    }

    /// Resolves one named entry point.
    ///
    /// Returns [`Outcome::Suppressed`] when the definition sets `output: false`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownStyle`] if `name` is not in the table
    /// - [`ResolveError::CyclicComposition`] if `extends` references loop
    pub fn resolve(&mut self, name: &str) -> Result<Outcome, ResolveError> {
        if !self.table.has(name) {
            return Err(ResolveError::UnknownStyle(name.to_string()));
        }

        let mut stack = Vec::new();
        let resolution = self
            .resolve_named(name, &mut stack)?
            .ok_or_else(|| ResolveError::UnknownStyle(name.to_string()))?;

        if resolution.output {
            Ok(Outcome::Rule(resolution.rule))
        } else {
            tracing::debug!(style = name, "output disabled, not emitting");
            Ok(Outcome::Suppressed)
        }
    }

    /// Resolves every definition in the table, in table order.
    ///
    /// Suppressed definitions are left out of the result.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolveError`] encountered. Use
    /// [`resolve_each`](Self::resolve_each) to keep resolving past failures.
    pub fn resolve_all(&mut self) -> Result<IndexMap<String, ResolvedRule>, ResolveError> {
        let mut rules = IndexMap::new();
        for name in self.table.names() {
            if let Outcome::Rule(rule) = self.resolve(name)? {
                rules.insert(name.to_string(), rule);
            }
        }
        Ok(rules)
    }

    /// Resolves every definition in the table, in table order, collecting
    /// failures instead of stopping at the first one.
    ///
    /// A failing name only costs its own rule: unrelated names still resolve.
    ///
    /// ```rust
    /// use textstyles::{Resolver, StyleDefinition, StyleTable};
    ///
    /// let table = StyleTable::new()
    ///     .add("loop", StyleDefinition::new().extends("loop"))
    ///     .add("body", StyleDefinition::new().set("fontSize", "16px"));
    ///
    /// let resolution = Resolver::new(&table).resolve_each();
    /// assert!(resolution.rules.contains_key("body"));
    /// assert!(resolution.failures.contains_key("loop"));
    /// ```
    pub fn resolve_each(&mut self) -> TableResolution {
        let mut resolution = TableResolution::default();
        for name in self.table.names() {
            match self.resolve(name) {
                Ok(Outcome::Rule(rule)) => {
                    resolution.rules.insert(name.to_string(), rule);
                }
                Ok(Outcome::Suppressed) => {}
                Err(err) => {
                    tracing::warn!(style = name, error = %err, "text style failed to resolve");
                    resolution.failures.insert(name.to_string(), err);
                }
            }
        }
        resolution
    }

    /// Resolves a definition looked up by name.
    ///
    /// Returns `Ok(None)` for names missing from the table, which contribute
    /// nothing to the extending definition. `stack` holds the names currently
    /// being resolved and is how cycles are found.
    fn resolve_named(
        &mut self,
        name: &str,
        stack: &mut Vec<String>,
    ) -> Result<Option<Resolution>, ResolveError> {
        if let Some(start) = stack.iter().position(|open| open == name) {
            let mut path = stack[start..].to_vec();
            path.push(name.to_string());
            return Err(ResolveError::CyclicComposition { path });
        }

        if let Some(cached) = self.cache.get(name) {
            tracing::trace!(style = name, "resolution cache hit");
            return Ok(Some(cached.clone()));
        }

        let table = self.table;
        let Some(definition) = table.get(name) else {
            tracing::debug!(style = name, "extends target not found, contributing nothing");
            return Ok(None);
        };

        stack.push(name.to_string());
        let resolution = self.resolve_definition(definition, stack);
        stack.pop();

        let resolution = resolution?;
        self.cache.insert(name.to_string(), resolution.clone());
        Ok(Some(resolution))
    }

    /// Resolves a definition body; nested selectors recurse through here.
    fn resolve_definition(
        &mut self,
        definition: &StyleDefinition,
        stack: &mut Vec<String>,
    ) -> Result<Resolution, ResolveError> {
        let mut rule = ResolvedRule::new();
        let mut output = true;

        if self.order == ExtendsOrder::First {
            self.apply_extends(&mut rule, definition.extends_targets(), stack)?;
        }

        for (key, entry) in definition.entries() {
            match entry {
                Entry::Extends(parents) => {
                    if self.order == ExtendsOrder::InPlace {
                        self.apply_extends(&mut rule, parents, stack)?;
                    }
                }
                Entry::Output(flag) => output = *flag,
                // A null value unsets the property, including an inherited one.
                Entry::Property(PropertyValue::Scalar(Scalar::Null)) => {
                    rule.remove(key);
                }
                Entry::Property(PropertyValue::Scalar(scalar)) => {
                    rule.insert(key, scalar.clone());
                }
                Entry::Property(PropertyValue::Sequence(items)) => {
                    apply_sequence(&mut rule, key, items);
                }
                Entry::Property(PropertyValue::Nested(nested)) => {
                    let inner = self.resolve_definition(nested, stack)?;
                    rule.insert(key, RuleValue::Nested(inner.rule));
                }
            }
        }

        Ok(Resolution { rule, output })
    }

    /// Merges each parent, in order, into `rule`. The parents' `output` flags
    /// are not carried over.
    fn apply_extends(
        &mut self,
        rule: &mut ResolvedRule,
        parents: &[String],
        stack: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        for parent in parents {
            if let Some(resolution) = self.resolve_named(parent, stack)? {
                rule.merge(resolution.rule);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def() -> StyleDefinition {
        StyleDefinition::new()
    }

    fn rule_of(table: &StyleTable, name: &str) -> ResolvedRule {
        Resolver::new(table)
            .resolve(name)
            .unwrap()
            .into_rule()
            .unwrap()
    }

    // =========================================================================
    // Plain definitions
    // =========================================================================

    #[test]
    fn test_scalars_pass_through_unchanged() {
        let table = StyleTable::new().add(
            "plain",
            def().set("fontWeight", 700).set("fontStyle", "italic"),
        );

        let rule = rule_of(&table, "plain");
        assert_eq!(
            rule,
            ResolvedRule::new()
                .with("fontWeight", 700)
                .with("fontStyle", "italic")
        );
    }

    #[test]
    fn test_unknown_entry_point() {
        let table = StyleTable::new();
        assert_eq!(
            Resolver::new(&table).resolve("ghost"),
            Err(ResolveError::UnknownStyle("ghost".to_string()))
        );
    }

    // =========================================================================
    // Extends
    // =========================================================================

    #[test]
    fn test_missing_extends_target_contributes_nothing() {
        let table = StyleTable::new().add("B", def().extends("nowhere").set("x", 1));
        assert_eq!(rule_of(&table, "B"), ResolvedRule::new().with("x", 1));
    }

    #[test]
    fn test_transitive_extends() {
        let table = StyleTable::new()
            .add("root", def().set("a", 1))
            .add("middle", def().extends("root").set("b", 2))
            .add("leaf", def().extends("middle").set("c", 3));

        let rule = rule_of(&table, "leaf");
        assert_eq!(rule.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_in_place_key_before_extends_is_overridden() {
        let table = StyleTable::new()
            .add("A", def().set("fontWeight", 700))
            .add("B", def().set("fontWeight", 400).extends("A"));

        assert_eq!(rule_of(&table, "B").text("fontWeight").as_deref(), Some("700"));
    }

    #[test]
    fn test_extends_first_lets_own_keys_win() {
        let table = StyleTable::new()
            .add("A", def().set("fontWeight", 700).set("color", "red"))
            .add("B", def().set("fontWeight", 400).extends("A"));

        let rule = Resolver::new(&table)
            .with_extends_order(ExtendsOrder::First)
            .resolve("B")
            .unwrap()
            .into_rule()
            .unwrap();

        assert_eq!(rule.text("fontWeight").as_deref(), Some("400"));
        assert_eq!(rule.keys().collect::<Vec<_>>(), vec!["fontWeight", "color"]);
    }

    #[test]
    fn test_parent_output_flag_does_not_propagate() {
        let table = StyleTable::new()
            .add("hidden", def().output(false).set("x", 1))
            .add("child", def().extends("hidden"));

        let mut resolver = Resolver::new(&table);
        assert_eq!(resolver.resolve("hidden"), Ok(Outcome::Suppressed));
        assert_eq!(
            resolver.resolve("child"),
            Ok(Outcome::Rule(ResolvedRule::new().with("x", 1)))
        );
    }

    #[test]
    fn test_own_output_true_after_parent() {
        let table = StyleTable::new()
            .add("hidden", def().output(false))
            .add("child", def().output(false).extends("hidden").output(true));

        assert!(!Resolver::new(&table).resolve("child").unwrap().is_suppressed());
    }

    // =========================================================================
    // Nested selectors
    // =========================================================================

    #[test]
    fn test_nested_block_extends_independently() {
        let table = StyleTable::new()
            .add("link", def().set("color", "blue"))
            .add(
                "article",
                def().set("color", "black").set("a", def().extends("link")),
            );

        let rule = rule_of(&table, "article");
        assert_eq!(rule.text("color").as_deref(), Some("black"));
        assert_eq!(
            rule.nested("a"),
            Some(&ResolvedRule::new().with("color", "blue"))
        );
    }

    #[test]
    fn test_nested_sequence_is_normalized() {
        let table = StyleTable::new().add(
            "article",
            def().set("h1", def().set("fontSize", ["2rem", "1.1"])),
        );

        let h1 = rule_of(&table, "article").nested("h1").cloned().unwrap();
        assert_eq!(h1.text("fontSize").as_deref(), Some("2rem"));
        assert_eq!(h1.text("lineHeight").as_deref(), Some("1.1"));
    }

    #[test]
    fn test_nested_output_is_not_a_property() {
        let table = StyleTable::new().add("x", def().set("a", def().output(false).set("y", 1)));

        let rule = rule_of(&table, "x");
        assert_eq!(rule.nested("a"), Some(&ResolvedRule::new().with("y", 1)));
    }

    #[test]
    fn test_null_property_is_dropped() {
        let table = StyleTable::new().add(
            "x",
            def().set("color", Scalar::Null).set("fontWeight", 700),
        );

        let rule = rule_of(&table, "x");
        assert!(!rule.contains_key("color"));
        assert_eq!(rule.keys().collect::<Vec<_>>(), vec!["fontWeight"]);
    }

    #[test]
    fn test_null_property_unsets_inherited_value() {
        let table = StyleTable::new()
            .add("base", def().set("color", "red").set("fontWeight", 700))
            .add("plain", def().extends("base").set("color", Scalar::Null));

        let rule = rule_of(&table, "plain");
        assert_eq!(rule, ResolvedRule::new().with("fontWeight", 700));
    }

    // =========================================================================
    // Cycles
    // =========================================================================

    #[test]
    fn test_self_reference_is_reported() {
        let table = StyleTable::new().add("self", def().extends("self"));
        assert_eq!(
            Resolver::new(&table).resolve("self"),
            Err(ResolveError::CyclicComposition {
                path: vec!["self".to_string(), "self".to_string()],
            })
        );
    }

    #[test]
    fn test_mutual_reference_is_reported() {
        let table = StyleTable::new()
            .add("a", def().extends("b"))
            .add("b", def().extends("c"))
            .add("c", def().extends("a"));

        match Resolver::new(&table).resolve("b") {
            Err(ResolveError::CyclicComposition { path }) => {
                assert_eq!(path, vec!["b", "c", "a", "b"]);
            }
            other => panic!("Expected CyclicComposition, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_through_nested_selector() {
        let table = StyleTable::new()
            .add("card", def().set("&:hover", def().extends("card")));

        assert!(matches!(
            Resolver::new(&table).resolve("card"),
            Err(ResolveError::CyclicComposition { .. })
        ));
    }

    #[test]
    fn test_cycle_does_not_affect_unrelated_names() {
        let table = StyleTable::new()
            .add("base", def().set("x", 1))
            .add("loop", def().extends_all(["base", "loop"]))
            .add("fine", def().extends("base").set("y", 2));

        let mut resolver = Resolver::new(&table);
        assert!(resolver.resolve("loop").is_err());
        assert_eq!(
            resolver.resolve("fine"),
            Ok(Outcome::Rule(ResolvedRule::new().with("x", 1).with("y", 2)))
        );
        assert!(resolver.resolve("loop").is_err());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let table = StyleTable::new()
            .add("root", def().set("x", 1))
            .add("left", def().extends("root").set("l", 1))
            .add("right", def().extends("root").set("r", 1))
            .add("bottom", def().extends_all(["left", "right"]));

        let rule = rule_of(&table, "bottom");
        assert_eq!(rule.keys().collect::<Vec<_>>(), vec!["x", "l", "r"]);
    }

    // =========================================================================
    // resolve_all
    // =========================================================================

    #[test]
    fn test_resolve_all_skips_suppressed_and_keeps_order() {
        let table = StyleTable::new()
            .add("z", def().set("a", 1))
            .add("hidden", def().output(false).set("b", 2))
            .add("m", def().extends("hidden"));

        let rules = Resolver::new(&table).resolve_all().unwrap();
        assert_eq!(rules.keys().collect::<Vec<_>>(), vec!["z", "m"]);
        assert_eq!(rules["m"], ResolvedRule::new().with("b", 2));
    }

    #[test]
    fn test_resolve_all_reports_cycle() {
        let table = StyleTable::new()
            .add("ok", def().set("a", 1))
            .add("bad", def().extends("bad"));

        assert!(matches!(
            Resolver::new(&table).resolve_all(),
            Err(ResolveError::CyclicComposition { .. })
        ));
    }

    #[test]
    fn test_resolve_each_keeps_unrelated_names() {
        let table = StyleTable::new()
            .add("a", def().extends("b"))
            .add("b", def().extends("a"))
            .add("hidden", def().output(false).set("x", 1))
            .add("body", def().extends("hidden").set("fontSize", "16px"));

        let resolution = Resolver::new(&table).resolve_each();

        assert!(!resolution.is_complete());
        assert_eq!(resolution.rules.keys().collect::<Vec<_>>(), vec!["body"]);
        assert_eq!(
            resolution.rules["body"],
            ResolvedRule::new().with("x", 1).with("fontSize", "16px")
        );
        assert_eq!(resolution.failures.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(matches!(
            resolution.failures["a"],
            ResolveError::CyclicComposition { .. }
        ));
    }

    #[test]
    fn test_resolve_each_complete_matches_resolve_all() {
        let table = StyleTable::new()
            .add("base", def().set("a", 1))
            .add("child", def().extends("base").set("b", 2));

        let resolution = Resolver::new(&table).resolve_each();
        assert!(resolution.is_complete());
        assert_eq!(resolution.rules, Resolver::new(&table).resolve_all().unwrap());
    }
}
