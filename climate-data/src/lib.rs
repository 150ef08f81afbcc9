//! Aggregation functions for climate observations.
//!
//! This crate turns loaded observation rows into the derived tables the
//! dashboard charts: per-group means (`aggregate`) and per-row series
//! annotated with their group's means (`enrich`). Everything here is pure
//! and deterministic; errors are structural and meant to abort startup.

pub mod aggregate;
pub mod enrich;
pub mod error;

pub use aggregate::{group_average, sort_by_field, to_table, AggregateRow, Key};
pub use enrich::{enrich_with_group_means, EnrichedRow};
pub use error::AggregateError;
