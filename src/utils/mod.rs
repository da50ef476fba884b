//! Utility modules for location scoring
//!
//! Contains shared functionality used across multiple criteria:
//! - Category: Bilingual label → ordinal category
//! - Coerce: Lenient numeric parsing for ingested cells
//! - Normalization: Population-relative min-max scaling

pub mod category;
pub mod coerce;
pub mod normalization;

// Re-export commonly used types
pub use category::{lookup_category, normalize_category, Category};
pub use coerce::coerce_number;
pub use normalization::{Direction, PopulationRange};
