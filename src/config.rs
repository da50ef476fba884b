//! Scoring configuration
//!
//! Weights and crowd polarity are an explicit, immutable object handed to the
//! scorer. The defaults are the production constants; alternate sets exist for
//! testing and what-if runs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::metrics::Criterion;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Per-criterion weights. Always non-negative and summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightConfig {
    price: f64,
    flood_risk: f64,
    crowd_level: f64,
    proximity: f64,
    green_space: f64,
}

/// Production weight set
pub const DEFAULT_WEIGHTS: WeightConfig = WeightConfig {
    price: 0.40,
    flood_risk: 0.30,
    crowd_level: 0.15,
    proximity: 0.10,
    green_space: 0.05,
};

impl Default for WeightConfig {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl WeightConfig {
    /// Build a validated weight set
    pub fn new(
        price: f64,
        flood_risk: f64,
        crowd_level: f64,
        proximity: f64,
        green_space: f64,
    ) -> Result<Self> {
        let weights = Self {
            price,
            flood_risk,
            crowd_level,
            proximity,
            green_space,
        };

        for criterion in Criterion::ALL {
            let w = weights.weight(criterion);
            if !w.is_finite() || w < 0.0 {
                return Err(ScoringError::InvalidWeights(format!(
                    "{} weight must be a non-negative number, got {}",
                    criterion.label(),
                    w
                )));
            }
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.6}",
                sum
            )));
        }

        Ok(weights)
    }

    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price,
            Criterion::FloodRisk => self.flood_risk,
            Criterion::CrowdLevel => self.crowd_level,
            Criterion::Proximity => self.proximity,
            Criterion::GreenSpace => self.green_space,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    /// Criterion label and weight as a percentage, in criterion order
    pub fn breakdown(&self) -> Vec<WeightShare> {
        Criterion::ALL
            .iter()
            .map(|c| WeightShare {
                criterion: *c,
                label: c.label(),
                percent: self.weight(*c) * 100.0,
            })
            .collect()
    }
}

/// One line of the weight information panel
#[derive(Debug, Clone, Serialize)]
pub struct WeightShare {
    pub criterion: Criterion,
    pub label: &'static str,
    pub percent: f64,
}

/// How crowd level maps onto desirability.
///
/// The production setting is `QuietPreferred`: a low crowd level is the
/// desirable end, matching the "quiet surroundings" advantage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrowdPolarity {
    /// low → 1.0, medium → 0.5, high → 0.0
    #[default]
    QuietPreferred,
    /// low → 0.0, medium → 0.5, high → 1.0
    BusyPreferred,
}

impl std::str::FromStr for CrowdPolarity {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" | "quiet_preferred" | "quiet-preferred" => Ok(CrowdPolarity::QuietPreferred),
            "busy" | "busy_preferred" | "busy-preferred" => Ok(CrowdPolarity::BusyPreferred),
            other => Err(ScoringError::InvalidInput(format!(
                "unknown crowd polarity '{}', expected 'quiet' or 'busy'",
                other
            ))),
        }
    }
}

/// Everything a scoring pass needs besides the records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoringConfig {
    pub weights: WeightConfig,
    pub crowd_polarity: CrowdPolarity,
}

impl ScoringConfig {
    pub fn new(weights: WeightConfig, crowd_polarity: CrowdPolarity) -> Self {
        Self {
            weights,
            crowd_polarity,
        }
    }
}
