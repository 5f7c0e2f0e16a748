//! Paper-and-ink theme for the archive TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
