//! Error types for scoring passes
//!
//! Every error is scoped to a single ingestion or scoring pass. Unrecognized
//! values inside a row are never errors: they are coerced and logged instead.
//! An empty affordability result is an outcome, see [`crate::Affordability`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A required column is absent from the source table.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// Empty record set, or an out-of-range purchase request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid weight configuration: {0}")]
    InvalidWeights(String),

    #[error("table read error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoringError {
    /// Short hint the presentation layer can show next to the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScoringError::MissingRequiredField(_) => Some(
                "Expected columns: name, price_per_m2, flood_risk, crowd_level, \
                 proximity_to_public_facilities, green_space_percent",
            ),
            ScoringError::InvalidInput(_) => {
                Some("Provide at least one location and a positive budget and area")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
