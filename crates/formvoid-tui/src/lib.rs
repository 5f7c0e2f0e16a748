//! formvoid-tui - Terminal UI for the FORM & VOID archive
//!
//! Renders [`formvoid_app::AppState`] with ratatui and feeds crossterm key
//! events back into the app's update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
