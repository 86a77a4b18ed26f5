//! Plugin configuration documents.
//!
//! ```yaml
//! theme:
//!   textIndent:
//!     "1": 1px
//!   textShadow:
//!     default: 0 2px 5px rgba(0, 0, 0, .5)
//!   textStyles:
//!     heading:
//!       fontWeight: 700
//! variants:
//!   ellipsis: [responsive, hover]
//! ```
//!
//! `theme.textStyles` becomes the [`StyleTable`]; the remaining theme
//! categories become the [`Theme`].

use serde_yaml::{Mapping, Value};

use super::options::VariantConfig;
use crate::error::StylesheetError;
use crate::style::parser::untag;
use crate::style::StyleTable;
use crate::theme::Theme;

/// Theme key holding the text-style definitions.
pub const TEXT_STYLES_KEY: &str = "textStyles";

/// Everything the plugin reads from the host configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    pub theme: Theme,
    pub text_styles: StyleTable,
    pub variants: VariantConfig,
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_text_styles(mut self, text_styles: StyleTable) -> Self {
        self.text_styles = text_styles;
        self
    }

    pub fn with_variants(mut self, variants: VariantConfig) -> Self {
        self.variants = variants;
        self
    }

    /// Parses a configuration document from YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textstyles::PluginConfig;
    ///
    /// let config = PluginConfig::from_yaml(r#"
    /// theme:
    ///   textStyles:
    ///     body:
    ///       fontSize: 16px
    /// variants:
    ///   kern: []
    /// "#).unwrap();
    ///
    /// assert!(config.text_styles.has("body"));
    /// assert!(config.variants.for_group("kern").is_empty());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Parses a configuration document from JSON.
    pub fn from_json(json: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Builds a configuration from an already parsed document.
    ///
    /// Missing sections are empty. Top-level keys other than `theme` and
    /// `variants` are ignored.
    pub fn from_value(value: &Value) -> Result<Self, StylesheetError> {
        let root = match untag(value) {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(StylesheetError::Parse {
                    message: "Plugin configuration must be a mapping".to_string(),
                })
            }
        };

        let mut config = Self::new();

        if let Some(theme) = root.get("theme") {
            let (theme, text_styles) = split_theme(theme)?;
            config.theme = theme;
            config.text_styles = text_styles;
        }

        if let Some(variants) = root.get("variants") {
            config.variants = match untag(variants) {
                Value::Null => VariantConfig::new(),
                variants => serde_yaml::from_value(variants.clone()).map_err(|e| {
                    StylesheetError::Parse {
                        message: format!("invalid variants: {}", e),
                    }
                })?,
            };
        }

        tracing::debug!(
            styles = config.text_styles.len(),
            categories = config.theme.categories().count(),
            "loaded plugin configuration"
        );
        Ok(config)
    }
}

/// Separates `textStyles` from the token categories.
fn split_theme(value: &Value) -> Result<(Theme, StyleTable), StylesheetError> {
    let mapping = match untag(value) {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok((Theme::new(), StyleTable::new())),
        _ => {
            return Err(StylesheetError::Parse {
                message: "theme must be a mapping of categories".to_string(),
            })
        }
    };

    let text_styles = match mapping.get(TEXT_STYLES_KEY) {
        Some(styles) => StyleTable::from_value(styles)?,
        None => StyleTable::new(),
    };
    let categories: Mapping = mapping
        .iter()
        .filter(|(key, _)| key.as_str() != Some(TEXT_STYLES_KEY))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let theme = Theme::from_value(&Value::Mapping(categories))?;
    Ok((theme, text_styles))
}
