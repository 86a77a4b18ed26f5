//! Text-style resolution.
//!
//! Resolution turns a named [`StyleDefinition`](crate::StyleDefinition) into a
//! flat [`ResolvedRule`]:
//!
//! 1. Entries are visited in declaration order into an ordered accumulator;
//!    a later write to the same key wins.
//! 2. `extends` resolves each parent in turn (recursively, through its own
//!    `extends` and nested selectors) and merges it shallowly. A parent's
//!    `output` flag is never carried over.
//! 3. `output` records the emission flag for the definition.
//! 4. Nested selectors are resolved as full definitions and stored under
//!    their selector key.
//! 5. Sequences are normalized (see [`normalize`]).
//!
//! A definition whose own `output` is `false` resolves to
//! [`Outcome::Suppressed`] at the top level while remaining usable as a parent.
//!
//! Cyclic `extends` chains fail with
//! [`ResolveError::CyclicComposition`](crate::ResolveError::CyclicComposition)
//! instead of recursing without bound.

pub mod normalize;
mod resolver;
mod rule;

pub use resolver::{ExtendsOrder, Resolver, TableResolution};
pub use rule::{Outcome, ResolvedRule, RuleValue};
