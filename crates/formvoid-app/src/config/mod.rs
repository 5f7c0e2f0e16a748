//! Configuration file parsing for FORM & VOID
//!
//! Supports:
//! - `.formvoid/config.toml` - Brand, context options and share settings
//! - `.formvoid/catalog.toml` - The archive records

pub mod catalog;
pub mod settings;
pub mod types;

pub use catalog::{default_catalog, default_records, load_catalog, parse_catalog};
pub use settings::{init_config_dir, load_settings, FORMVOID_DIR};
pub use types::*;
