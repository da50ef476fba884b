//! Land Parcel Scorer
//!
//! Ranks candidate land parcels by a weighted combination of five criteria,
//! filters the ranking by affordability and explains each shortlisted
//! location with advantages and disadvantages.
//!
//! Module layout:
//! - `utils/`: Category normalization, numeric coercion, min-max scaling
//! - `records`: Raw and cleaned location rows
//! - `data`: CSV loading with Polars
//! - `metrics/`: Per-criterion scoring (price, flood risk, crowd level,
//!   proximity, green space)
//! - `scorer`: Aggregation, ranking and the recommendation pipeline
//! - `affordability`: Budget/area filter and top-K selection
//! - `explanation/`: Rule table, knowledge base and insight generation

pub mod affordability;
pub mod config;
pub mod data;
pub mod error;
pub mod explanation;
pub mod metrics;
pub mod records;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use affordability::{filter_affordable, top_k, Affordability, PurchaseRequest};
pub use config::{CrowdPolarity, ScoringConfig, WeightConfig, DEFAULT_WEIGHTS};
pub use data::LocationTable;
pub use error::{Result, ScoringError};
pub use explanation::{generate_insight, InsightGenerator, KnowledgeBase, KnowledgeEntry, LocationInsight};
pub use metrics::{Criterion, CriterionScores};
pub use records::{location_key, IngestOptions, LocationRecord, RawLocationRow};
pub use scorer::{
    aggregate, LocationScorer, Recommendation, RecommendationStatus, RecommendedLocation,
    ScoredLocation,
};
pub use utils::{normalize_category, Category};
