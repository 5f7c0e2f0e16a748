//! Catalog loader for .formvoid/catalog.toml
//!
//! The catalog is read once at startup. When no catalog file exists the
//! built-in FORM & VOID archive is used. A file that exists but cannot be
//! parsed is an error: silently showing a different archive would be worse.

use std::path::Path;

use serde::{Deserialize, Serialize};

use formvoid_core::prelude::*;
use formvoid_core::{Catalog, Category, ContentRecord, Shape};

use super::settings::FORMVOID_DIR;
use super::types::Settings;

/// On-disk catalog layout: a list of `[[records]]` tables
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub records: Vec<ContentRecord>,
}

/// Load the catalog named in `settings` from `<project>/.formvoid/`
pub fn load_catalog(project_path: &Path, settings: &Settings) -> Result<Catalog> {
    let path = project_path
        .join(FORMVOID_DIR)
        .join(&settings.archive.catalog_file);

    if !path.exists() {
        info!("No catalog at {:?}, using built-in archive", path);
        return default_catalog();
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = parse_catalog(&content, &path)?;
    info!("Loaded {} records from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Parse catalog TOML. `origin` is only used in error messages.
pub fn parse_catalog(content: &str, origin: &Path) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| Error::catalog_parse(origin, e.to_string()))?;

    let records = file
        .records
        .into_iter()
        .map(|mut record| {
            record.keywords = std::mem::take(&mut record.keywords)
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            record
        })
        .collect();

    Catalog::new(records)
}

/// The built-in archive
pub fn default_catalog() -> Result<Catalog> {
    Catalog::new(default_records())
}

/// Records of the built-in archive, in display order
pub fn default_records() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new(
            "1",
            Category::Blueprint,
            "Flow Architect: 불안을 잠재우는 수험생 관리 설계도",
            "2023.10.24",
        )
        .with_image("https://picsum.photos/600/800")
        .with_shape(Shape::Portrait)
        .with_keywords(["structure", "anxious"]),
        ContentRecord::new(
            "2",
            Category::Essay,
            "12년의 기록: 데이터로 내 취향의 패턴을 읽다",
            "2023.11.02",
        )
        .with_image("https://picsum.photos/600/600")
        .with_keywords(["insight", "lost"]),
        ContentRecord::new(
            "3",
            Category::Project,
            "Persona Modeling: 고객의 마음을 구조화하는 법",
            "2024.01.15",
        )
        .with_image("https://picsum.photos/600/600")
        .with_keywords(["reference", "curious"])
        .restricted(),
        ContentRecord::new(
            "4",
            Category::Inspiration,
            "일본 소설의 첫 문장 수집",
            "ARCHIVE_042",
        )
        .with_image("https://picsum.photos/600/750")
        .with_shape(Shape::Portrait)
        .with_keywords(["silence", "overwhelmed"]),
        ContentRecord::new(
            "5",
            Category::Essay,
            "비움의 미학: 여백이 주는 완전함",
            "2024.02.10",
        )
        .with_image("https://picsum.photos/600/500")
        .with_keywords(["silence", "insight", "anxious"]),
        ContentRecord::new(
            "6",
            Category::Blueprint,
            "Morning Routine System v2.0",
            "SYSTEM_LOG",
        )
        .with_image("https://picsum.photos/600/900")
        .with_shape(Shape::Portrait)
        .with_keywords(["structure", "overwhelmed"]),
        ContentRecord::new(
            "7",
            Category::Project,
            "Library of Silence: 공간 브랜딩",
            "2023.09.11",
        )
        .with_image("https://picsum.photos/600/600")
        .with_keywords(["reference", "lost"])
        .restricted(),
    ]
}

/// Serialize the built-in archive as catalog TOML
pub(crate) fn default_catalog_toml() -> Result<String> {
    let file = CatalogFile {
        records: default_records(),
    };
    toml::to_string_pretty(&file).map_err(|e| Error::config(e.to_string()))
}
