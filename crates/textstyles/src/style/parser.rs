//! YAML and JSON parsing for style tables.
//!
//! # Schema
//!
//! ```yaml
//! # Plain definition
//! base:
//!   fontFamily: [Helvetica, Arial, sans-serif]
//!   fontWeight: 400
//!
//! # Composition; a single name or a list
//! heading:
//!   extends: base
//!   fontSize: [64px, "1.2"]     # size + line-height pair
//!   fontWeight: 700
//!
//! # Not emitted, still usable as an extends target
//! mixin:
//!   output: false
//!   letterSpacing: 0.05em
//!
//! # Nested selectors are definitions too
//! article:
//!   extends: [base, mixin]
//!   a:
//!     extends: link
//!     "&:hover":
//!       color: red
//! ```
//!
//! JSON documents follow the same shape; key order is preserved either way.
//!
//! Shapes the resolver does not model are coerced rather than rejected:
//! non-scalar sequence items become their JSON text, an `output` that isn't a
//! boolean counts as `true`, and unusable `extends` items are skipped.

use serde_yaml::{Mapping, Value};

use super::definition::{Entry, StyleDefinition, EXTENDS_KEY, OUTPUT_KEY};
use super::registry::StyleTable;
use super::value::{PropertyValue, Scalar};
use crate::error::StylesheetError;

impl StyleTable {
    /// Parses a style table from YAML.
    ///
    /// # Errors
    ///
    /// Returns `StylesheetError` if the YAML is invalid or the root is not a
    /// mapping. Definitions that are not mappings are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textstyles::StyleTable;
    ///
    /// let table = StyleTable::from_yaml(r#"
    /// base:
    ///   fontWeight: 700
    /// heading:
    ///   extends: base
    ///   fontSize: 10px
    /// "#).unwrap();
    ///
    /// assert_eq!(table.names().collect::<Vec<_>>(), vec!["base", "heading"]);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Parses a style table from JSON.
    pub fn from_json(json: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&root)
    }

    /// Builds a style table from an already parsed document.
    ///
    /// `null` is accepted as an empty table. A definition that is not a
    /// mapping is skipped with a warning.
    pub fn from_value(value: &Value) -> Result<Self, StylesheetError> {
        let mapping = match untag(value) {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(StylesheetError::Parse {
                    message: "Stylesheet must be a mapping of style names".to_string(),
                })
            }
        };

        let mut table = StyleTable::new();
        for (key, value) in mapping {
            let name = key_to_string(key)?;
            match StyleDefinition::parse(value, &name) {
                Ok(definition) => table.insert(&name, definition),
                Err(StylesheetError::InvalidDefinition { message, .. }) => tracing::warn!(
                    style = %name,
                    %message,
                    "skipping text style that is not a mapping"
                ),
                Err(err) => return Err(err),
            }
        }
        Ok(table)
    }
}

impl StyleDefinition {
    /// Parses a style definition from a YAML value.
    ///
    /// The value must be a mapping. Mapping values become nested definitions.
    pub fn parse(value: &Value, style_name: &str) -> Result<Self, StylesheetError> {
        match untag(value) {
            Value::Mapping(map) => parse_mapping(map, style_name),
            other => Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: format!("Expected mapping, got {}", shape_name(other)),
            }),
        }
    }
}

fn parse_mapping(map: &Mapping, style_name: &str) -> Result<StyleDefinition, StylesheetError> {
    let mut definition = StyleDefinition::new();

    for (key, value) in map {
        let key = key_to_string(key)?;
        let entry = match key.as_str() {
            EXTENDS_KEY => Entry::Extends(parse_extends(value, style_name)),
            OUTPUT_KEY => Entry::Output(parse_output(value, style_name)),
            _ => Entry::Property(parse_property(value, &key, style_name)?),
        };
        definition.insert(&key, entry);
    }

    Ok(definition)
}

fn parse_property(
    value: &Value,
    key: &str,
    style_name: &str,
) -> Result<PropertyValue, StylesheetError> {
    let property = match untag(value) {
        Value::Mapping(nested) => PropertyValue::Nested(parse_mapping(nested, style_name)?),
        Value::Sequence(items) => PropertyValue::Sequence(
            items
                .iter()
                .map(|item| sequence_item(item, key, style_name))
                .collect(),
        ),
        scalar => PropertyValue::Scalar(to_scalar(scalar)),
    };
    Ok(property)
}

fn parse_extends(value: &Value, style_name: &str) -> Vec<String> {
    let items: &[Value] = match untag(value) {
        Value::Sequence(items) => items,
        Value::Null => &[],
        single => std::slice::from_ref(single),
    };

    items
        .iter()
        .filter_map(|item| match untag(item) {
            Value::String(name) => Some(name.clone()),
            Value::Number(n) => Some(n.to_string()),
            other => {
                tracing::warn!(
                    style = style_name,
                    shape = shape_name(other),
                    "skipping extends item that is not a name"
                );
                None
            }
        })
        .collect()
}

fn parse_output(value: &Value, style_name: &str) -> bool {
    match untag(value) {
        Value::Bool(flag) => *flag,
        other => {
            tracing::warn!(
                style = style_name,
                shape = shape_name(other),
                "non-boolean output flag, treating as true"
            );
            true
        }
    }
}

fn sequence_item(item: &Value, key: &str, style_name: &str) -> Scalar {
    match untag(item) {
        Value::Sequence(_) | Value::Mapping(_) => {
            tracing::warn!(
                style = style_name,
                property = key,
                "non-scalar item in sequence, keeping its JSON text"
            );
            Scalar::Text(serde_json::to_string(item).unwrap_or_default())
        }
        scalar => to_scalar(scalar),
    }
}

/// Converts a scalar YAML value.
pub(crate) fn to_scalar(value: &Value) -> Scalar {
    match untag(value) {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Scalar::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Scalar::Float(f)
            } else {
                Scalar::Text(n.to_string())
            }
        }
        Value::String(s) => Scalar::Text(s.clone()),
        other => Scalar::Text(serde_json::to_string(other).unwrap_or_default()),
    }
}

/// Turns a mapping key into a string; scalars are accepted.
pub(crate) fn key_to_string(key: &Value) -> Result<String, StylesheetError> {
    match untag(key) {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(StylesheetError::Parse {
            message: format!("Keys must be strings, got {}", shape_name(other)),
        }),
    }
}

/// Strips YAML tags (`!foo value`), keeping the tagged value.
pub(crate) fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
