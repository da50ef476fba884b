//! CRITERION: GREEN SPACE
//!
//! Share of the parcel's surroundings that is green space (0-100). Min-max
//! scaled against the population; more green space scores higher.

use crate::records::LocationRecord;
use crate::utils::{Direction, PopulationRange};

pub fn green_space_range(records: &[LocationRecord]) -> Option<PopulationRange> {
    PopulationRange::from_values(records.iter().map(|r| r.green_space_percent))
}

pub fn score_green_space(percent: f64, range: &PopulationRange) -> f64 {
    range.normalize(percent, Direction::HigherIsBetter)
}
