//! Core domain type definitions

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// Archive category of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Blueprint,
    Essay,
    Project,
    Inspiration,
}

impl Category {
    /// All categories in navigation order
    pub const ALL: [Category; 4] = [
        Category::Blueprint,
        Category::Essay,
        Category::Project,
        Category::Inspiration,
    ];

    /// Upper-case label shown in navigation and tables
    pub fn label(&self) -> &'static str {
        match self {
            Category::Blueprint => "BLUEPRINT",
            Category::Essay => "ESSAY",
            Category::Project => "PROJECT",
            Category::Inspiration => "INSPIRATION",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_category(s))
    }
}

/// A category filter: a single category or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar entries in display order (ALL first)
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Blueprint),
        CategoryFilter::Only(Category::Essay),
        CategoryFilter::Only(Category::Project),
        CategoryFilter::Only(Category::Inspiration),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a record of `category` passes this filter
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape
// ─────────────────────────────────────────────────────────────────────────────

/// Image shape of a record. Only affects grid span, never filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Square,
    Portrait,
    Landscape,
}

// ─────────────────────────────────────────────────────────────────────────────
// ContentRecord
// ─────────────────────────────────────────────────────────────────────────────

/// One archive entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique identifier within a catalog
    pub id: String,

    #[serde(alias = "type")]
    pub category: Category,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display label; free-form (e.g. "2023.10.24" or "SYSTEM_LOG")
    pub date: String,

    /// Opaque image reference, resolved by the renderer
    #[serde(default, alias = "image_url")]
    pub image: String,

    #[serde(default, alias = "aspect_ratio")]
    pub shape: Shape,

    /// Lowercase tags used by the context filter
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub keywords: BTreeSet<String>,

    /// Listed, but the detail screen is off limits
    #[serde(default, alias = "locked")]
    pub restricted: bool,
}

impl ContentRecord {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: None,
            date: date.into(),
            image: String::new(),
            shape: Shape::default(),
            keywords: BTreeSet::new(),
            restricted: false,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the keyword set; tags are stored lowercase
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }

    /// True if any of `tokens` is one of this record's keywords
    pub fn matches_any_keyword(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.keywords.contains(*t))
    }

    /// Short zero-padded id used as a table row label ("01")
    pub fn row_label(&self) -> String {
        format!("{:0>2}", self.id)
    }

    /// Long zero-padded reference id shown on the detail screen ("0001")
    pub fn reference_id(&self) -> String {
        format!("{:0>4}", self.id)
    }

    pub fn status_label(&self) -> &'static str {
        if self.restricted {
            "LOCKED"
        } else {
            "ACTIVE"
        }
    }
}
