//! Design-token themes.
//!
//! A [`Theme`] maps a category (`textIndent`, `textShadow`, `fontSize`, ...) to
//! its tokens. Themes are read-only input: the plugin reads the categories it
//! generates utilities from and leaves everything else alone.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{Theme, TokenValue};
