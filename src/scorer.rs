//! Location Scorer - Main coordinator for ranking candidate parcels
//!
//! Integrates the five criteria, the affordability filter and the insight
//! generator. Every pass is computed in local buffers over a full snapshot
//! of the records and returned whole.

use serde::{Deserialize, Serialize};

use crate::affordability::{filter_affordable, top_k, Affordability, PurchaseRequest};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::explanation::{InsightGenerator, KnowledgeBase, LocationInsight};
use crate::metrics::{score_record, Criterion, CriterionScores, PopulationRanges};
use crate::records::LocationRecord;

/// A location with its per-criterion and final scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLocation {
    #[serde(flatten)]
    pub record: LocationRecord,
    #[serde(flatten)]
    pub scores: CriterionScores,
    /// Weighted sum of the criterion scores, in [0, 1]
    pub final_score: f64,
    /// `price_per_m2 × area`, set by the affordability filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

impl ScoredLocation {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The five criterion scores in fixed criterion order (radar chart data)
    pub fn criterion_profile(&self) -> [(Criterion, f64); 5] {
        Criterion::ALL.map(|c| (c, self.scores.get(c)))
    }
}

/// Score and rank a record set.
///
/// Sorted by `final_score` descending; ties keep input order.
/// Fails with `InvalidInput` when `records` is empty.
pub fn aggregate(records: &[LocationRecord], config: &ScoringConfig) -> Result<Vec<ScoredLocation>> {
    let ranges = PopulationRanges::from_records(records)?;

    let mut scored: Vec<ScoredLocation> = records
        .iter()
        .map(|record| {
            let scores = score_record(record, &ranges, config.crowd_polarity);
            ScoredLocation {
                record: record.clone(),
                final_score: scores.weighted_total(&config.weights),
                scores,
                total_price: None,
            }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

    tracing::debug!(
        locations = scored.len(),
        price_min = ranges.price.min,
        price_max = ranges.price.max,
        green_min = ranges.green_space.min,
        green_max = ranges.green_space.max,
        "Scored location population"
    );

    Ok(scored)
}

/// Outcome of the affordability step of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationStatus {
    Affordable { matched: usize },
    EmptyResult,
}

/// One shortlisted location with its narrative
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedLocation {
    pub location: ScoredLocation,
    pub insight: LocationInsight,
}

/// Everything the presentation layer needs from one pass
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub request: PurchaseRequest,
    /// Full ranked table, unfiltered
    pub ranked: Vec<ScoredLocation>,
    /// Affordable top-K with insights, in rank order
    pub shortlist: Vec<RecommendedLocation>,
    pub status: RecommendationStatus,
}

/// Main location scorer
pub struct LocationScorer {
    config: ScoringConfig,
    insights: InsightGenerator,
}

impl Default for LocationScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), KnowledgeBase::builtin())
    }
}

impl LocationScorer {
    pub fn new(config: ScoringConfig, knowledge_base: KnowledgeBase) -> Self {
        Self {
            config,
            insights: InsightGenerator::new(knowledge_base),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        self.insights.knowledge_base()
    }

    /// Rank the full record set
    pub fn rank(&self, records: &[LocationRecord]) -> Result<Vec<ScoredLocation>> {
        aggregate(records, &self.config)
    }

    /// Advantages and disadvantages for one scored location
    pub fn explain(&self, location: &ScoredLocation) -> LocationInsight {
        self.insights.generate_insight(location)
    }

    /// Rank, filter by affordability, keep the top K and explain each.
    ///
    /// The request is validated first. No affordable location is reported
    /// through `RecommendationStatus::EmptyResult`, not as an error.
    pub fn recommend(
        &self,
        records: &[LocationRecord],
        request: &PurchaseRequest,
    ) -> Result<Recommendation> {
        request.validate()?;

        let ranked = self.rank(records)?;

        let (shortlist, status) = match filter_affordable(&ranked, request.budget, request.area) {
            Affordability::EmptyResult => {
                tracing::info!(
                    budget = request.budget,
                    area = request.area,
                    "No location fits the budget"
                );
                (Vec::new(), RecommendationStatus::EmptyResult)
            }
            Affordability::Affordable(affordable) => {
                let matched = affordable.len();
                let shortlist = top_k(affordable, request.top_k)
                    .into_iter()
                    .map(|location| {
                        let insight = self.explain(&location);
                        RecommendedLocation { location, insight }
                    })
                    .collect();
                (shortlist, RecommendationStatus::Affordable { matched })
            }
        };

        Ok(Recommendation {
            request: *request,
            ranked,
            shortlist,
            status,
        })
    }
}
