//! Convenient imports.
//!
//! ```rust
//! use textstyles::prelude::*;
//!
//! let table = StyleTable::new()
//!     .add("body", StyleDefinition::new().set("fontSize", "16px"));
//!
//! let rule = Resolver::new(&table).resolve("body").unwrap().into_rule().unwrap();
//! assert_eq!(rule.text("fontSize").as_deref(), Some("16px"));
//! ```

pub use crate::error::{PluginError, ResolveError, StylesheetError};
pub use crate::plugin::{
    CollectedRules, PluginConfig, PluginOptions, RuleRegistrar, TypographyPlugin, VariantConfig,
};
pub use crate::resolve::{Outcome, ResolvedRule, Resolver};
pub use crate::style::{StyleDefinition, StyleTable};
pub use crate::theme::Theme;
