//! # formvoid-core - Core Domain Types
//!
//! Foundation crate for the FORM & VOID archive. Provides the content record
//! model, the immutable catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`] - Closed set of archive categories (Blueprint, Essay, ...)
//! - [`CategoryFilter`] - A category or `ALL`
//! - [`Shape`] - Image shape that drives grid span (square, portrait, landscape)
//! - [`ContentRecord`] - A single archive entry
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Ordered, read-only collection of records with unique ids
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use formvoid_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use types::{Category, CategoryFilter, ContentRecord, Shape};
