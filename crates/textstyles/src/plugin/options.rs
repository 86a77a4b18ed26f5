//! Plugin options and per-utility variant configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::naming::DEFAULT_COMPONENT_PREFIX;

/// Variants applied to a utility group when none are configured.
pub const DEFAULT_VARIANTS: &[&str] = &["responsive"];

/// Switches for the utility groups and the component class prefix.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use textstyles::PluginOptions;
///
/// let options: PluginOptions = serde_yaml::from_str("hyphens: false\ncomponentPrefix: ''").unwrap();
/// assert!(!options.hyphens);
/// assert!(options.ellipsis);
/// assert_eq!(options.component_prefix, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    pub ellipsis: bool,
    pub hyphens: bool,
    pub text_unset: bool,
    pub caps: bool,
    pub nums: bool,
    pub ligatures: bool,
    pub kern: bool,
    /// Prepended to every text-style class name. May be empty.
    pub component_prefix: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            ellipsis: true,
            hyphens: true,
            text_unset: true,
            caps: true,
            nums: true,
            ligatures: true,
            kern: true,
            component_prefix: DEFAULT_COMPONENT_PREFIX.to_string(),
        }
    }
}

/// Variant lists per utility group (`ellipsis: [responsive, hover]`).
///
/// Groups without an entry get [`DEFAULT_VARIANTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantConfig {
    groups: IndexMap<String, Vec<String>>,
}

impl VariantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variants for a utility group. Returns self for chaining.
    pub fn set<I, S>(mut self, group: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(group.to_string(), variants.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the variants for a utility group.
    pub fn for_group(&self, group: &str) -> Vec<String> {
        match self.groups.get(group) {
            Some(variants) => variants.clone(),
            None => DEFAULT_VARIANTS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PluginOptions::default();
        assert!(options.ellipsis && options.hyphens && options.text_unset);
        assert!(options.caps && options.nums && options.ligatures && options.kern);
        assert_eq!(options.component_prefix, "c-");
    }

    #[test]
    fn test_options_from_json() {
        let options: PluginOptions =
            serde_json::from_str(r#"{"textUnset": false, "componentPrefix": "type-"}"#).unwrap();
        assert!(!options.text_unset);
        assert!(options.kern);
        assert_eq!(options.component_prefix, "type-");
    }

    #[test]
    fn test_variants_default_to_responsive() {
        let variants = VariantConfig::new().set("ellipsis", ["hover", "focus"]);
        assert_eq!(variants.for_group("ellipsis"), vec!["hover", "focus"]);
        assert_eq!(variants.for_group("hyphens"), vec!["responsive"]);
    }

    #[test]
    fn test_variants_empty_list_is_kept() {
        let variants = VariantConfig::new().set("kern", Vec::<String>::new());
        assert!(variants.for_group("kern").is_empty());
    }

    #[test]
    fn test_variants_from_yaml() {
        let variants: VariantConfig =
            serde_yaml::from_str("caps: [responsive, hover]\nnums: []").unwrap();
        assert_eq!(variants.for_group("caps"), vec!["responsive", "hover"]);
        assert!(variants.for_group("nums").is_empty());
    }
}
