//! Filter engine: reduces the catalog to the visible subset
//!
//! A [`FilterState`] is either a category filter or a context filter, never
//! both. Every result keeps the catalog's relative order, and an empty result
//! is an ordinary value rather than an error.

use std::fmt;

use serde::Serialize;

use formvoid_core::{Catalog, CategoryFilter, ContentRecord};

/// The active view filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterState {
    /// Category-only filter (`ALL` shows everything)
    Category { filter: CategoryFilter },

    /// Two free-choice facets projected onto keyword tokens
    Context { condition: String, need: String },
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::Category {
            filter: CategoryFilter::All,
        }
    }
}

impl FilterState {
    pub fn category(filter: impl Into<CategoryFilter>) -> Self {
        FilterState::Category {
            filter: filter.into(),
        }
    }

    pub fn context(condition: impl Into<String>, need: impl Into<String>) -> Self {
        FilterState::Context {
            condition: condition.into(),
            need: need.into(),
        }
    }

    /// The category filter, if this is a category filter
    pub fn category_filter(&self) -> Option<CategoryFilter> {
        match self {
            FilterState::Category { filter } => Some(*filter),
            FilterState::Context { .. } => None,
        }
    }

    /// Whether a single record passes this filter
    pub fn admits(&self, record: &ContentRecord) -> bool {
        match self {
            FilterState::Category { filter } => filter.accepts(record.category),
            FilterState::Context { condition, need } => {
                let condition = condition.to_lowercase();
                let need = need.to_lowercase();
                record.matches_any_keyword(&[condition.as_str(), need.as_str()])
            }
        }
    }

    /// Human readable label, e.g. `ESSAY` or `ANXIOUS + STRUCTURE`
    pub fn label(&self) -> String {
        match self {
            FilterState::Category { filter } => filter.label().to_string(),
            FilterState::Context { condition, need } => {
                format!("{} + {}", condition.to_uppercase(), need.to_uppercase())
            }
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Apply `filter` to `catalog`, preserving catalog order
pub fn visible<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a ContentRecord> {
    catalog.iter().filter(|r| filter.admits(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formvoid_core::{Category, Shape};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ContentRecord::new("1", Category::Blueprint, "Flow Architect", "2023.10.24")
                .with_shape(Shape::Portrait)
                .with_keywords(["structure", "anxious"]),
            ContentRecord::new("2", Category::Essay, "12 Years", "2023.11.02")
                .with_keywords(["insight", "lost"]),
            ContentRecord::new("3", Category::Project, "Persona Modeling", "2024.01.15")
                .with_keywords(["reference", "curious"])
                .restricted(),
            ContentRecord::new("4", Category::Inspiration, "First Sentences", "ARCHIVE_042"),
            ContentRecord::new("5", Category::Essay, "Aesthetics of Emptiness", "2024.02.10")
                .with_keywords(["silence", "insight", "anxious"]),
            ContentRecord::new("6", Category::Blueprint, "Morning Routine", "SYSTEM_LOG")
                .with_keywords(["structure", "overwhelmed"]),
        ])
        .unwrap()
    }

    fn ids(records: &[&ContentRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_whole_catalog_in_order() {
        let catalog = catalog();
        let result = visible(&catalog, &FilterState::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let catalog = catalog();
        let result = visible(&catalog, &FilterState::category(Category::Blueprint));
        assert_eq!(ids(&result), vec!["1", "6"]);
        assert!(result.iter().all(|r| r.category == Category::Blueprint));
    }

    #[test]
    fn test_category_without_matches_is_empty() {
        let catalog = Catalog::new(vec![
            ContentRecord::new("1", Category::Essay, "A", "D"),
            ContentRecord::new("2", Category::Essay, "B", "D"),
        ])
        .unwrap();
        let result = visible(&catalog, &FilterState::category(Category::Project));
        assert!(result.is_empty());
    }

    #[test]
    fn test_context_is_logical_or_of_tokens() {
        let catalog = catalog();
        // "anxious" hits 1 and 5, "insight" hits 2 and 5
        let result = visible(&catalog, &FilterState::context("anxious", "insight"));
        assert_eq!(ids(&result), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_context_tokens_are_lowercased() {
        let catalog = catalog();
        let result = visible(&catalog, &FilterState::context("Overwhelmed", "SILENCE"));
        assert_eq!(ids(&result), vec!["5", "6"]);
    }

    #[test]
    fn test_records_without_keywords_never_match_context() {
        let catalog = catalog();
        for condition in ["anxious", "lost", "curious", "overwhelmed", ""] {
            let result = visible(&catalog, &FilterState::context(condition, ""));
            assert!(result.iter().all(|r| r.id != "4"));
        }
    }

    #[test]
    fn test_context_with_unknown_tokens_is_empty() {
        let catalog = catalog();
        let result = visible(&catalog, &FilterState::context("joyful", "noise"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        let filter = FilterState::context("lost", "structure");
        let first = ids(&visible(&catalog, &filter));
        let second = ids(&visible(&catalog, &filter));
        assert_eq!(first, second);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_admits_single_records() {
        let catalog = catalog();
        let essay = FilterState::category(Category::Essay);
        assert!(essay.admits(&catalog.records()[1]));
        assert!(!essay.admits(&catalog.records()[0]));

        let context = FilterState::context("CURIOUS", "Silence");
        assert!(context.admits(&catalog.records()[2]));
        assert!(!context.admits(&catalog.records()[3]));
    }

    #[test]
    fn test_labels() {
        assert_eq!(FilterState::default().label(), "ALL");
        assert_eq!(FilterState::category(Category::Essay).label(), "ESSAY");
        assert_eq!(
            FilterState::context("anxious", "structure").label(),
            "ANXIOUS + STRUCTURE"
        );
    }
}
