//! # Textstyles - Typography Rule Generator
//!
//! Textstyles turns a table of named, composable text styles plus a design
//! token theme into the rules a stylesheet framework emits. It provides:
//!
//! - Composable style definitions with `extends`, nested selectors, and an
//!   `output` switch for building-block styles
//! - A resolver that flattens composition, normalizes sequence values, and
//!   rejects cyclic `extends` chains instead of recursing forever
//! - Selector naming for components (`largeHeading` to `.c-large-heading`)
//! - Typography utility tables (ellipsis, hyphens, font-variant switches, ...)
//!   and theme-driven indent and shadow utilities
//!
//! Emitting CSS text and expanding variants belong to the host framework,
//! reached through the [`RuleRegistrar`] trait.
//!
//! ## Core Concepts
//!
//! - [`StyleTable`]: every named [`StyleDefinition`] for one resolution pass
//! - [`Resolver`]: flattens a named definition into a [`ResolvedRule`]
//! - [`Theme`]: design tokens grouped by category
//! - [`TypographyPlugin`]: generates utilities and components for a registrar
//!
//! ## Quick Start
//!
//! ```rust
//! use textstyles::{Outcome, Resolver, StyleTable};
//!
//! let table = StyleTable::from_yaml(r#"
//! sans:
//!   output: false
//!   fontFamily: [Helvetica, Arial, sans-serif]
//! largeHeading:
//!   extends: sans
//!   fontSize: [64px, "1.2"]
//!   fontWeight: 700
//! "#).unwrap();
//!
//! let mut resolver = Resolver::new(&table);
//! assert_eq!(resolver.resolve("sans").unwrap(), Outcome::Suppressed);
//!
//! let heading = resolver.resolve("largeHeading").unwrap().into_rule().unwrap();
//! assert_eq!(heading.text("fontFamily").as_deref(), Some("Helvetica, Arial, sans-serif"));
//! assert_eq!(heading.text("fontSize").as_deref(), Some("64px"));
//! assert_eq!(heading.text("lineHeight").as_deref(), Some("1.2"));
//! ```
//!
//! ## Plugin
//!
//! ```rust
//! use textstyles::{CollectedRules, PluginConfig, TypographyPlugin};
//!
//! let config = PluginConfig::from_yaml(r#"
//! theme:
//!   textShadow:
//!     default: 0 2px 5px rgba(0, 0, 0, .5)
//!   textStyles:
//!     bodyText:
//!       fontSize: 16px
//! variants:
//!   ellipsis: [responsive, hover]
//! "#).unwrap();
//!
//! let mut collected = CollectedRules::new();
//! TypographyPlugin::default().register(&config, &mut collected).unwrap();
//!
//! assert!(collected.utility(".text-shadow").is_some());
//! assert!(collected.component(".c-body-text").is_some());
//! ```

/// Implements `From<T>` for an enum with a `Scalar(Scalar)` variant, for every
/// type that converts into a [`Scalar`].
macro_rules! from_scalar_types {
    ($target:ident) => {
        from_scalar_types!($target: &str, String, i32, i64, f64, bool, $crate::style::Scalar);
    };
    ($target:ident: $($source:ty),+) => {
        $(
            impl From<$source> for $target {
                fn from(value: $source) -> Self {
                    $target::Scalar(value.into())
                }
            }
        )+
    };
}

// Internal modules
mod error;
pub mod naming;
pub mod plugin;
pub mod prelude;
pub mod resolve;
pub mod style;
pub mod theme;

// Error types
pub use error::{PluginError, ResolveError, StyleValidationError, StylesheetError};

// Style module exports
pub use style::{
    join_scalars, Entry, PropertyValue, Scalar, StyleDefinition, StyleTable, EXTENDS_KEY,
    OUTPUT_KEY,
};

// Resolution exports
pub use resolve::{ExtendsOrder, Outcome, ResolvedRule, Resolver, RuleValue, TableResolution};

// Theme exports
pub use theme::{Theme, TokenValue};

// Plugin exports
pub use plugin::{
    CollectedRules, PluginConfig, PluginOptions, RuleRegistrar, RuleSet, TypographyPlugin,
    UtilityBatch, VariantConfig,
};
