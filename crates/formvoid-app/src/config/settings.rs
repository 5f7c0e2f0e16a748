//! Settings parser for .formvoid/config.toml

use std::path::Path;

use formvoid_core::prelude::*;

use super::catalog::default_catalog_toml;
use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration directory
pub const FORMVOID_DIR: &str = ".formvoid";

/// Load settings from `<project>/.formvoid/config.toml`
///
/// A missing, unreadable or malformed file falls back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(FORMVOID_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create default config and catalog files in .formvoid/
///
/// Existing files are left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let formvoid_dir = project_path.join(FORMVOID_DIR);

    if !formvoid_dir.exists() {
        std::fs::create_dir_all(&formvoid_dir)
            .map_err(|e| Error::config(format!("Failed to create .formvoid dir: {}", e)))?;
    }

    let config_path = formvoid_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# FORM & VOID Configuration

[brand]
name = "FORM & VOID"
slogan = "Architecting the Quiet Context"
# manifesto = "..."
# location = "SEOUL, 02:00 AM"

[archive]
# Catalog file inside .formvoid/
catalog_file = "catalog.toml"

[context]
# "I feel <condition> and need <need>."
conditions = ["anxious", "lost", "curious", "overwhelmed"]
needs = ["structure", "insight", "reference", "silence"]

[share]
base_url = "https://formvoid.studio/"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    let catalog_path = formvoid_dir.join(Settings::default().archive.catalog_file);
    if !catalog_path.exists() {
        let content = format!(
            "# FORM & VOID archive records\n\n{}",
            default_catalog_toml()?
        );
        std::fs::write(&catalog_path, content)
            .map_err(|e| Error::config(format!("Failed to write catalog.toml: {}", e)))?;
        info!("Created default catalog at {:?}", catalog_path);
    }

    Ok(())
}
