//! Configuration types

use serde::{Deserialize, Serialize};
use url::Url;

use formvoid_core::prelude::*;

/// Application settings (.formvoid/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub brand: BrandSettings,

    #[serde(default)]
    pub archive: ArchiveSettings,

    #[serde(default)]
    pub context: ContextSettings,

    #[serde(default)]
    pub share: ShareSettings,
}

/// Brand copy shown in the header, footer and about screen
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandSettings {
    #[serde(default = "default_brand_name")]
    pub name: String,

    #[serde(default = "default_slogan")]
    pub slogan: String,

    #[serde(default = "default_manifesto")]
    pub manifesto: String,

    /// Footer location line
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            slogan: default_slogan(),
            manifesto: default_manifesto(),
            location: default_location(),
        }
    }
}

fn default_brand_name() -> String {
    "FORM & VOID".to_string()
}

fn default_slogan() -> String {
    "Architecting the Quiet Context".to_string()
}

fn default_manifesto() -> String {
    "공간의 여백에서 사람을 배웠고 구조의 논리에서 시스템을 익혔습니다.\n\
     12년의 기록이 제게 알려준 것은 좋은 도구는 행동을 억지로 바꾸는 것이 아니라 \
     그저 당신의 흐름을 발견해 준다는 사실입니다.\n\
     이제 데이터라는 재료로 당신의 고유한 맥락이 숨 쉴 수 있는 집을 짓습니다."
        .to_string()
}

fn default_location() -> String {
    "SEOUL, 02:00 AM · 37.5665° N, 126.9780° E".to_string()
}

/// Catalog location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchiveSettings {
    /// Catalog file name inside `.formvoid/`
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
        }
    }
}

fn default_catalog_file() -> String {
    "catalog.toml".to_string()
}

/// Option lists of the hero context sentence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContextSettings {
    #[serde(default = "default_conditions")]
    pub conditions: Vec<String>,

    #[serde(default = "default_needs")]
    pub needs: Vec<String>,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            conditions: default_conditions(),
            needs: default_needs(),
        }
    }
}

fn default_conditions() -> Vec<String> {
    ["anxious", "lost", "curious", "overwhelmed"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_needs() -> Vec<String> {
    ["structure", "insight", "reference", "silence"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Share link settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://formvoid.studio/".to_string()
}

impl ShareSettings {
    /// Permalink of a record: `<base_url>/archive/<id>`
    ///
    /// The id is pushed as one percent-encoded path segment.
    pub fn permalink(&self, record_id: &str) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut link = Url::parse(&base).map_err(|e| {
            Error::config_invalid(format!("share.base_url '{}': {}", self.base_url, e))
        })?;
        link.set_query(None);
        link.set_fragment(None);
        link.path_segments_mut()
            .map_err(|()| {
                Error::config_invalid(format!(
                    "share.base_url '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("archive")
            .push(record_id);
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.brand.name, "FORM & VOID");
        assert_eq!(settings.archive.catalog_file, "catalog.toml");
        assert_eq!(settings.context.conditions.len(), 4);
        assert_eq!(settings.context.needs[0], "structure");
    }

    #[test]
    fn test_permalink_joins_archive_path() {
        let share = ShareSettings::default();
        let url = share.permalink("7").unwrap();
        assert_eq!(url.as_str(), "https://formvoid.studio/archive/7");
    }

    #[test]
    fn test_permalink_keeps_base_path_segment() {
        let share = ShareSettings {
            base_url: "https://example.com/portfolio".to_string(),
        };
        let url = share.permalink("12").unwrap();
        assert_eq!(url.as_str(), "https://example.com/portfolio/archive/12");
    }

    #[test]
    fn test_permalink_encodes_id_as_one_segment() {
        let share = ShareSettings::default();
        assert_eq!(
            share.permalink("a#b").unwrap().as_str(),
            "https://formvoid.studio/archive/a%23b"
        );
        assert_eq!(
            share.permalink("x?y").unwrap().as_str(),
            "https://formvoid.studio/archive/x%3Fy"
        );

        let url = share.permalink("../secret").unwrap();
        assert!(url.path().starts_with("/archive/"));
        assert_eq!(url.path_segments().unwrap().count(), 2);
    }

    #[test]
    fn test_permalink_rejects_base_without_path() {
        let share = ShareSettings {
            base_url: "mailto:studio@formvoid.studio".to_string(),
        };
        assert!(share.permalink("1").is_err());
    }

    #[test]
    fn test_permalink_rejects_invalid_base() {
        let share = ShareSettings {
            base_url: "not a url".to_string(),
        };
        let err = share.permalink("1").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_recoverable());
    }
}
