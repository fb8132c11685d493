//! Diet Daily food catalog
//!
//! Builds the Taiwan / Hong Kong medical food catalog from literal tables and
//! writes it as a single JSON document:
//!
//! ```text
//! data::<COLLECTION> rows ──► generate() ──► Catalog ──► write_to(path)
//!                                              │
//!                                              └──► check() / summary()
//! ```
//!
//! Collection counts and totals are always derived from the rows that were
//! actually built, so editing a table cannot leave stale metadata behind.

pub mod catalog;
pub mod data;
pub mod error;
pub mod types;

pub use catalog::{generate, Catalog, CatalogSummary, CheckReport, Metadata, ScoringLegend};
pub use data::FoodRow;
pub use error::{CatalogError, CatalogResult};
pub use types::*;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "taiwan-hk-foods.json";
