//! FORM & VOID archive browser
//!
//! The binary wires configuration, logging and the catalog together and
//! hands the resulting state to either the TUI or the headless driver.

pub mod headless;

// Re-export main entry points
pub use formvoid_tui::run as run_tui;
pub use headless::run_headless;
