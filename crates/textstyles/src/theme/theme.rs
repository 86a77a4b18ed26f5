//! Theme struct holding design tokens by category.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::StylesheetError;
use crate::style::parser::{key_to_string, to_scalar, untag};
use crate::style::Scalar;

/// A design token value.
///
/// Tokens are scalars or ordered lists of scalars. Mappings (for example a
/// nested colour palette) are carried through unchanged as [`TokenValue::Map`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
    Map(IndexMap<String, TokenValue>),
}

from_scalar_types!(TokenValue);

/// A read-only collection of design tokens, grouped by category.
///
/// Categories and tokens keep their declaration order, which is the order in
/// which theme-driven utilities are generated.
///
/// # Example
///
/// ```rust
/// use textstyles::Theme;
///
/// let theme = Theme::new()
///     .add_token("textIndent", "1", "1px")
///     .add_token("textIndent", "2", "2px");
///
/// assert_eq!(theme.category("textIndent").map(|c| c.len()), Some(2));
/// assert!(theme.category("textShadow").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    categories: IndexMap<String, IndexMap<String, TokenValue>>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token to a category, creating the category if needed.
    pub fn add_token<V: Into<TokenValue>>(
        mut self,
        category: &str,
        token: &str,
        value: V,
    ) -> Self {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(token.to_string(), value.into());
        self
    }

    /// Replaces a whole category.
    pub fn insert_category(&mut self, category: &str, tokens: IndexMap<String, TokenValue>) {
        self.categories.insert(category.to_string(), tokens);
    }

    /// Returns the tokens of a category.
    pub fn category(&self, category: &str) -> Option<&IndexMap<String, TokenValue>> {
        self.categories.get(category)
    }

    /// Returns a single token.
    pub fn token(&self, category: &str, token: &str) -> Option<&TokenValue> {
        self.categories.get(category)?.get(token)
    }

    /// Iterates category names in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Parses a theme from YAML.
    ///
    /// ```rust
    /// use textstyles::{Theme, TokenValue};
    ///
    /// let theme = Theme::from_yaml(r#"
    /// fontFamily:
    ///   sans: [Helvetica, Arial, sans-serif]
    /// textShadow:
    ///   default: 0 2px 5px rgba(0, 0, 0, .5)
    /// "#).unwrap();
    ///
    /// assert!(matches!(theme.token("fontFamily", "sans"), Some(TokenValue::Sequence(_))));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Parses a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Builds a theme from an already parsed document.
    ///
    /// A category that isn't a mapping is skipped with a warning.
    pub fn from_value(value: &Value) -> Result<Self, StylesheetError> {
        let mapping = match untag(value) {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(StylesheetError::Parse {
                    message: "Theme must be a mapping of categories".to_string(),
                })
            }
        };

        let mut theme = Theme::new();
        for (key, value) in mapping {
            let category = key_to_string(key)?;
            match token_value(value)? {
                TokenValue::Map(tokens) => theme.insert_category(&category, tokens),
                _ => tracing::warn!(
                    category = %category,
                    "skipping theme category that is not a mapping"
                ),
            }
        }
        Ok(theme)
    }
}

fn token_value(value: &Value) -> Result<TokenValue, StylesheetError> {
    let token = match untag(value) {
        Value::Mapping(mapping) => {
            let mut tokens = IndexMap::new();
            for (key, value) in mapping {
                tokens.insert(key_to_string(key)?, token_value(value)?);
            }
            TokenValue::Map(tokens)
        }
        Value::Sequence(items) => TokenValue::Sequence(items.iter().map(to_scalar).collect()),
        scalar => TokenValue::Scalar(to_scalar(scalar)),
    };
    Ok(token)
}
