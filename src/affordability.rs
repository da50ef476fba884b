//! Affordability Filter
//!
//! Admission test applied after ranking: a location is affordable when
//! `price_per_m2 × area <= budget`. Rank order is preserved.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::scorer::ScoredLocation;

/// Budget, land area and shortlist length requested by a buyer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Total budget in base currency
    pub budget: f64,
    /// Land area in square metres
    pub area: f64,
    pub top_k: usize,
}

impl PurchaseRequest {
    pub fn new(budget: f64, area: f64, top_k: usize) -> Self {
        Self { budget, area, top_k }
    }

    /// Budget and area must be finite and positive, top_k at least 1
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(ScoringError::InvalidInput(format!(
                "budget must be positive, got {}",
                self.budget
            )));
        }
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(ScoringError::InvalidInput(format!(
                "area must be positive, got {}",
                self.area
            )));
        }
        if self.top_k == 0 {
            return Err(ScoringError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of the affordability filter
#[derive(Debug, Clone, PartialEq)]
pub enum Affordability {
    /// Non-empty, in rank order, each with `total_price` set
    Affordable(Vec<ScoredLocation>),
    /// Nothing fits; the caller decides what guidance to show
    EmptyResult,
}

impl Affordability {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Affordability::EmptyResult)
    }

    pub fn locations(&self) -> &[ScoredLocation] {
        match self {
            Affordability::Affordable(locations) => locations,
            Affordability::EmptyResult => &[],
        }
    }

    pub fn into_locations(self) -> Vec<ScoredLocation> {
        match self {
            Affordability::Affordable(locations) => locations,
            Affordability::EmptyResult => Vec::new(),
        }
    }
}

/// Keep the locations whose total price fits the budget.
///
/// Budget and area are used as given; validate them with
/// [`PurchaseRequest::validate`] at the interface.
pub fn filter_affordable(scored: &[ScoredLocation], budget: f64, area: f64) -> Affordability {
    let affordable: Vec<ScoredLocation> = scored
        .iter()
        .filter_map(|location| {
            let total_price = location.record.price_per_m2 * area;
            (total_price <= budget).then(|| ScoredLocation {
                total_price: Some(total_price),
                ..location.clone()
            })
        })
        .collect();

    tracing::debug!(
        candidates = scored.len(),
        affordable = affordable.len(),
        budget,
        area,
        "Applied affordability filter"
    );

    if affordable.is_empty() {
        Affordability::EmptyResult
    } else {
        Affordability::Affordable(affordable)
    }
}

/// First `k` locations in rank order
pub fn top_k(mut locations: Vec<ScoredLocation>, k: usize) -> Vec<ScoredLocation> {
    locations.truncate(k);
    locations
}
