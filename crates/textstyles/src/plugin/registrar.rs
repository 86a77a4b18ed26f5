//! The seam between rule generation and CSS emission.
//!
//! [`TypographyPlugin`](super::TypographyPlugin) produces selector/rule sets
//! and hands them to a [`RuleRegistrar`]. Turning them into CSS text and
//! expanding variants (`responsive`, `hover`, ...) is the registrar's job.

use super::utilities::RuleSet;
use crate::resolve::ResolvedRule;

/// Receives the rules generated by the plugin.
pub trait RuleRegistrar {
    /// Registers a group of utility rules with the variants to generate.
    fn add_utilities(&mut self, rules: RuleSet, variants: &[String]);

    /// Registers the resolved text-style rules.
    fn add_components(&mut self, rules: RuleSet);
}

/// One `add_utilities` call.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityBatch {
    pub rules: RuleSet,
    pub variants: Vec<String>,
}

/// A registrar that keeps everything in memory, in call order.
///
/// ```rust
/// use textstyles::{CollectedRules, PluginConfig, TypographyPlugin};
///
/// let mut collected = CollectedRules::new();
/// TypographyPlugin::default()
///     .register(&PluginConfig::default(), &mut collected)
///     .unwrap();
///
/// assert!(collected.utility(".ellipsis").is_some());
/// assert!(collected.components.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedRules {
    pub utilities: Vec<UtilityBatch>,
    pub components: RuleSet,
}

impl CollectedRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a utility rule by selector across every batch.
    pub fn utility(&self, selector: &str) -> Option<&ResolvedRule> {
        self.utilities
            .iter()
            .find_map(|batch| batch.rules.get(selector))
    }

    /// Looks up a component rule by selector.
    pub fn component(&self, selector: &str) -> Option<&ResolvedRule> {
        self.components.get(selector)
    }

    /// Every utility selector, in registration order.
    pub fn utility_selectors(&self) -> Vec<&str> {
        self.utilities
            .iter()
            .flat_map(|batch| batch.rules.keys().map(String::as_str))
            .collect()
    }
}

impl RuleRegistrar for CollectedRules {
    fn add_utilities(&mut self, rules: RuleSet, variants: &[String]) {
        self.utilities.push(UtilityBatch {
            rules,
            variants: variants.to_vec(),
        });
    }

    fn add_components(&mut self, rules: RuleSet) {
        self.components.extend(rules);
    }
}
