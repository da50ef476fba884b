//! Criterion modules for location scoring
//!
//! Each criterion is implemented in its own module. Continuous criteria
//! (price, green space) are scaled against the population; ordinal criteria
//! (flood risk, crowd level, proximity) map categories straight to scores.

pub mod crowd_level;
pub mod flood_risk;
pub mod green_space;
pub mod price;
pub mod proximity;

pub use crowd_level::score_crowd_level;
pub use flood_risk::score_flood_risk;
pub use green_space::{green_space_range, score_green_space};
pub use price::{price_range, score_price};
pub use proximity::score_proximity;

use serde::{Deserialize, Serialize};

use crate::config::{CrowdPolarity, WeightConfig};
use crate::error::{Result, ScoringError};
use crate::records::LocationRecord;
use crate::utils::PopulationRange;

/// The five scored attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    FloodRisk,
    CrowdLevel,
    Proximity,
    GreenSpace,
}

impl Criterion {
    /// Fixed evaluation and display order
    pub const ALL: [Criterion; 5] = [
        Criterion::Price,
        Criterion::FloodRisk,
        Criterion::CrowdLevel,
        Criterion::Proximity,
        Criterion::GreenSpace,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Price => "Land price",
            Criterion::FloodRisk => "Flood risk",
            Criterion::CrowdLevel => "Crowd level",
            Criterion::Proximity => "Public facility proximity",
            Criterion::GreenSpace => "Green space",
        }
    }
}

/// Per-criterion scores for one location, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub price_score: f64,
    pub flood_score: f64,
    pub crowd_score: f64,
    pub proximity_score: f64,
    pub green_space_score: f64,
}

impl CriterionScores {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price_score,
            Criterion::FloodRisk => self.flood_score,
            Criterion::CrowdLevel => self.crowd_score,
            Criterion::Proximity => self.proximity_score,
            Criterion::GreenSpace => self.green_space_score,
        }
    }

    /// Weighted sum of the five scores, clamped to [0, 1] against float drift
    pub fn weighted_total(&self, weights: &WeightConfig) -> f64 {
        Criterion::ALL
            .iter()
            .map(|c| weights.weight(*c) * self.get(*c))
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Population ranges for the continuous criteria
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationRanges {
    pub price: PopulationRange,
    pub green_space: PopulationRange,
}

impl PopulationRanges {
    /// Ranges over the whole record set; `InvalidInput` when it is empty
    pub fn from_records(records: &[LocationRecord]) -> Result<Self> {
        match (price_range(records), green_space_range(records)) {
            (Some(price), Some(green_space)) => Ok(Self { price, green_space }),
            _ => Err(ScoringError::InvalidInput(
                "cannot score an empty set of locations".to_string(),
            )),
        }
    }
}

/// Score one record against precomputed population ranges
pub fn score_record(
    record: &LocationRecord,
    ranges: &PopulationRanges,
    crowd_polarity: CrowdPolarity,
) -> CriterionScores {
    CriterionScores {
        price_score: score_price(record.price_per_m2, &ranges.price),
        flood_score: score_flood_risk(record.flood_risk),
        crowd_score: score_crowd_level(record.crowd_level, crowd_polarity),
        proximity_score: score_proximity(record.proximity_to_public_facilities),
        green_space_score: score_green_space(record.green_space_percent, &ranges.green_space),
    }
}
