//! Value types for style definitions.
//!
//! A property in a [`StyleDefinition`](super::StyleDefinition) holds one of three
//! shapes, modelled as a tagged variant so resolution can match exhaustively:
//!
//! - [`PropertyValue::Scalar`]: a single value (`700`, `"10px"`)
//! - [`PropertyValue::Sequence`]: an ordered list of scalars
//!   (`["Helvetica", "Arial", "sans-serif"]`, `["64px", "1.2"]`)
//! - [`PropertyValue::Nested`]: a nested selector scope (`a:`, `&:hover:`)

use std::fmt;

use super::definition::StyleDefinition;

/// A single terminal value.
///
/// `Display` renders the textual form used in a style sheet.
///
/// # Example
///
/// ```rust
/// use textstyles::Scalar;
///
/// assert_eq!(Scalar::from(700).to_string(), "700");
/// assert_eq!(Scalar::from(1.25).to_string(), "1.25");
/// assert_eq!(Scalar::from("10px").to_string(), "10px");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Returns the text content if this is a `Text` scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Joins scalars into one comma-separated value (`"Helvetica, Arial"`).
pub fn join_scalars(items: &[Scalar]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The value side of a non-reserved key in a style definition.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A literal value stored as-is.
    Scalar(Scalar),
    /// An ordered list, normalized during resolution.
    Sequence(Vec<Scalar>),
    /// A nested selector scope, resolved like a full definition.
    Nested(StyleDefinition),
}

from_scalar_types!(PropertyValue);

impl<T: Into<Scalar>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for PropertyValue {
    fn from(items: [T; N]) -> Self {
        PropertyValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<StyleDefinition> for PropertyValue {
    fn from(definition: StyleDefinition) -> Self {
        PropertyValue::Nested(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from("bold").to_string(), "bold");
        assert_eq!(Scalar::from(700).to_string(), "700");
        assert_eq!(Scalar::from(1.2).to_string(), "1.2");
        assert_eq!(Scalar::from(1.0).to_string(), "1");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::Null.to_string(), "");
    }

    #[test]
    fn test_join_scalars() {
        let items = vec![
            Scalar::from("Helvetica"),
            Scalar::from("Arial"),
            Scalar::from("sans-serif"),
        ];
        assert_eq!(join_scalars(&items), "Helvetica, Arial, sans-serif");
        assert_eq!(join_scalars(&[]), "");
    }

    #[test]
    fn test_property_value_from_scalar() {
        let value: PropertyValue = "10px".into();
        assert_eq!(value, PropertyValue::Scalar(Scalar::Text("10px".into())));
    }

    #[test]
    fn test_property_value_from_vec_and_array() {
        let from_vec: PropertyValue = vec!["64px", "1.2"].into();
        let from_array: PropertyValue = ["64px", "1.2"].into();
        assert_eq!(from_vec, from_array);
        assert!(matches!(from_vec, PropertyValue::Sequence(items) if items.len() == 2));
    }

    #[test]
    fn test_property_value_from_definition() {
        let value: PropertyValue = StyleDefinition::new().set("color", "red").into();
        assert!(matches!(value, PropertyValue::Nested(_)));
    }
}
