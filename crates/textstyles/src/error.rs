//! Error types for parsing, validating, and resolving text styles.
//!
//! - [`StylesheetError`]: a style table or theme document could not be parsed
//! - [`StyleValidationError`]: a table has dangling `extends` targets or cycles
//! - [`ResolveError`]: a definition could not be resolved
//! - [`PluginError`]: any of the above, surfaced while registering rules

use indexmap::IndexMap;
use thiserror::Error;

/// Error returned when a stylesheet or theme document is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// YAML or JSON parse error, or a structurally invalid document.
    #[error("failed to parse stylesheet: {message}")]
    Parse { message: String },

    /// A style definition has the wrong shape.
    #[error("invalid definition for style '{style}': {message}")]
    InvalidDefinition { style: String, message: String },
}

/// Error returned by [`StyleTable::validate`](crate::StyleTable::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// A definition extends a name that isn't in the table.
    #[error("style '{from}' extends non-existent style '{to}'")]
    UnresolvedExtends { from: String, to: String },

    /// A cycle was found among `extends` references.
    #[error("cycle detected in style composition: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Error returned when resolving a definition fails.
///
/// A failure is local to the name being resolved: other names in the same
/// pass still resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The requested entry point is not in the table.
    #[error("unknown text style '{0}'")]
    UnknownStyle(String),

    /// `extends` references loop back onto a definition being resolved.
    #[error("cyclic composition: {}", .path.join(" -> "))]
    CyclicComposition { path: Vec<String> },
}

/// Error returned by plugin configuration loading and rule registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Some text styles failed to resolve. Every other rule was still
    /// registered.
    #[error("{} text style(s) failed to resolve: {}", .failures.len(), describe_failures(.failures))]
    Unresolved {
        failures: IndexMap<String, ResolveError>,
    },
}

fn describe_failures(failures: &IndexMap<String, ResolveError>) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{}: {}", name, err))
        .collect::<Vec<_>>()
        .join("; ")
}
