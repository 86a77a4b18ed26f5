//! Rule generation for a host stylesheet framework.
//!
//! [`TypographyPlugin::register`] produces, in order:
//!
//! 1. theme-driven utilities: `textIndent`, `textShadow`
//! 2. fixed utilities: `ellipsis`, `hyphens`, `textUnset`, `caps`, `nums`,
//!    `ligatures`, `kern` (each behind its [`PluginOptions`] switch)
//! 3. components: every emitted text style as `.{prefix}{kebab-name}`
//!
//! and hands each group to a [`RuleRegistrar`].

mod config;
mod options;
mod registrar;
pub mod utilities;

pub use config::{PluginConfig, TEXT_STYLES_KEY};
pub use options::{PluginOptions, VariantConfig, DEFAULT_VARIANTS};
pub use registrar::{CollectedRules, RuleRegistrar, UtilityBatch};
pub use utilities::RuleSet;

use crate::error::PluginError;
use crate::naming::component_selector;
use crate::resolve::{Resolver, TableResolution};
use utilities::{table_rules, text_indent_rules, text_shadow_rules, FIXED_GROUPS};

/// The typography plugin.
///
/// ```rust
/// use textstyles::{CollectedRules, PluginConfig, PluginOptions, StyleDefinition, StyleTable,
///     TypographyPlugin};
///
/// let config = PluginConfig::new().with_text_styles(
///     StyleTable::new().add("largeHeading", StyleDefinition::new().set("fontWeight", 700)),
/// );
///
/// let mut collected = CollectedRules::new();
/// TypographyPlugin::new(PluginOptions::default())
///     .register(&config, &mut collected)
///     .unwrap();
///
/// assert!(collected.component(".c-large-heading").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypographyPlugin {
    options: PluginOptions,
}

impl TypographyPlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Generates every rule group and registers it.
    ///
    /// A text style that fails to resolve only loses its own component: the
    /// registrar still receives every utility and every other component.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Unresolved`] after registering if any text
    /// style failed, for example because it is cyclic.
    pub fn register<R: RuleRegistrar>(
        &self,
        config: &PluginConfig,
        registrar: &mut R,
    ) -> Result<(), PluginError> {
        let TableResolution {
            rules: components,
            failures,
        } = self.component_rules(config);

        registrar.add_utilities(
            text_indent_rules(&config.theme),
            &config.variants.for_group("textIndent"),
        );
        registrar.add_utilities(
            text_shadow_rules(&config.theme),
            &config.variants.for_group("textShadow"),
        );

        for group in FIXED_GROUPS {
            if !(group.enabled)(&self.options) {
                tracing::debug!(group = group.key, "utility group disabled");
                continue;
            }
            registrar.add_utilities(
                table_rules(group.table),
                &config.variants.for_group(group.key),
            );
        }

        tracing::debug!(components = components.len(), "registering text styles");
        registrar.add_components(components);

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PluginError::Unresolved { failures })
        }
    }

    /// Resolves every emitted text style and keys it by selector.
    ///
    /// Failures stay keyed by style name.
    pub fn component_rules(&self, config: &PluginConfig) -> TableResolution {
        let resolution = Resolver::new(&config.text_styles).resolve_each();
        TableResolution {
            rules: resolution
                .rules
                .into_iter()
                .map(|(name, rule)| {
                    (component_selector(&self.options.component_prefix, &name), rule)
                })
                .collect(),
            failures: resolution.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleDefinition, StyleTable};
    use crate::theme::Theme;

    // =========================================================================
    // Registration order
    // =========================================================================

    #[test]
    fn test_default_registration_order() {
        let mut collected = CollectedRules::new();
        TypographyPlugin::default()
            .register(&PluginConfig::new(), &mut collected)
            .unwrap();

        // Two theme-driven groups (empty here) and seven fixed groups.
        assert_eq!(collected.utilities.len(), 9);
        assert!(collected.utilities[0].rules.is_empty());
        assert!(collected.utilities[1].rules.is_empty());
        assert!(collected.utilities[2].rules.contains_key(".ellipsis"));
        assert!(collected.utilities[8].rules.contains_key(".kern"));
    }

    #[test]
    fn test_theme_groups_come_first() {
        let config = PluginConfig::new().with_theme(
            Theme::new()
                .add_token("textShadow", "default", "0 0 1px black")
                .add_token("textIndent", "px", "1px"),
        );

        let mut collected = CollectedRules::new();
        TypographyPlugin::default()
            .register(&config, &mut collected)
            .unwrap();

        let selectors = collected.utility_selectors();
        assert_eq!(&selectors[..3], &[".indent-px", ".text-shadow", ".ellipsis"]);
    }

    // =========================================================================
    // Options and variants
    // =========================================================================

    #[test]
    fn test_disabled_groups_are_skipped() {
        let options = PluginOptions {
            ellipsis: false,
            kern: false,
            ..PluginOptions::default()
        };

        let mut collected = CollectedRules::new();
        TypographyPlugin::new(options)
            .register(&PluginConfig::new(), &mut collected)
            .unwrap();

        assert_eq!(collected.utilities.len(), 7);
        assert!(collected.utility(".ellipsis").is_none());
        assert!(collected.utility(".kern").is_none());
        assert!(collected.utility(".small-caps").is_some());
    }

    #[test]
    fn test_variants_per_group() {
        let config = PluginConfig::new()
            .with_variants(VariantConfig::new().set("hyphens", ["hover"]));

        let mut collected = CollectedRules::new();
        TypographyPlugin::default()
            .register(&config, &mut collected)
            .unwrap();

        let hyphens = collected
            .utilities
            .iter()
            .find(|batch| batch.rules.contains_key(".hyphens-auto"))
            .unwrap();
        assert_eq!(hyphens.variants, vec!["hover"]);
        assert_eq!(collected.utilities[0].variants, vec!["responsive"]);
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[test]
    fn test_components_use_prefix() {
        let config = PluginConfig::new().with_text_styles(
            StyleTable::new().add("bodyText", StyleDefinition::new().set("fontSize", "16px")),
        );
        let options = PluginOptions {
            component_prefix: "type-".to_string(),
            ..PluginOptions::default()
        };

        let rules = TypographyPlugin::new(options).component_rules(&config).rules;
        assert!(rules.contains_key(".type-body-text"));
    }

    #[test]
    fn test_suppressed_styles_not_registered() {
        let config = PluginConfig::new().with_text_styles(
            StyleTable::new()
                .add("base", StyleDefinition::new().output(false).set("fontWeight", 400))
                .add("body", StyleDefinition::new().extends("base")),
        );

        let rules = TypographyPlugin::default().component_rules(&config).rules;
        assert_eq!(rules.keys().collect::<Vec<_>>(), vec![".c-body"]);
        assert_eq!(rules[".c-body"].text("fontWeight").as_deref(), Some("400"));
    }

    #[test]
    fn test_cycle_only_drops_its_own_components() {
        let config = PluginConfig::new().with_text_styles(
            StyleTable::new()
                .add("a", StyleDefinition::new().extends("b"))
                .add("b", StyleDefinition::new().extends("a"))
                .add("body", StyleDefinition::new().set("fontSize", "16px")),
        );

        let mut collected = CollectedRules::new();
        let err = TypographyPlugin::default()
            .register(&config, &mut collected)
            .unwrap_err();

        match err {
            PluginError::Unresolved { failures } => {
                assert_eq!(failures.keys().collect::<Vec<_>>(), vec!["a", "b"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(collected.components.keys().collect::<Vec<_>>(), vec![".c-body"]);
        assert_eq!(collected.utilities.len(), 9);
    }
}
