//! Declarative text styles: values, definitions, and the named table.
//!
//! - [`Scalar`] and [`PropertyValue`]: the shapes a property can take
//! - [`StyleDefinition`]: an ordered bundle of properties, nested selectors,
//!   and the reserved `extends` / `output` keys
//! - [`StyleTable`]: every named definition for one resolution pass
//!
//! Definitions compose through `extends`, so a table reads in layers:
//!
//! ```yaml
//! # Building blocks, never emitted
//! serif:
//!   output: false
//!   fontFamily: [Georgia, serif]
//!
//! # Emitted styles composed from them
//! largeHeading:
//!   extends: serif
//!   fontSize: [64px, "1.2"]
//! ```
//!
//! Tables are built programmatically or parsed from YAML/JSON
//! ([`StyleTable::from_yaml`], [`StyleTable::from_json`]).

mod definition;
pub(crate) mod parser;
mod registry;
mod value;

pub use definition::{Entry, StyleDefinition, EXTENDS_KEY, OUTPUT_KEY};
pub use registry::StyleTable;
pub use value::{join_scalars, PropertyValue, Scalar};
