//! CRITERION: PRICE PER SQUARE METRE
//!
//! Min-max scaled against the population being scored, inverted so the
//! cheapest location scores 1.0 and the most expensive 0.0.

use crate::records::LocationRecord;
use crate::utils::{Direction, PopulationRange};

/// Price range of the population; `None` when there are no records
pub fn price_range(records: &[LocationRecord]) -> Option<PopulationRange> {
    PopulationRange::from_values(records.iter().map(|r| r.price_per_m2))
}

/// Score one price against the population range
pub fn score_price(price_per_m2: f64, range: &PopulationRange) -> f64 {
    range.normalize(price_per_m2, Direction::LowerIsBetter)
}
