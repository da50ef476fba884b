//! CRITERION: CROWD LEVEL
//!
//! Ordinal, with the direction set by [`CrowdPolarity`]. The production
//! polarity treats quiet surroundings as desirable.

use crate::config::CrowdPolarity;
use crate::utils::Category;

pub fn score_crowd_level(level: Category, polarity: CrowdPolarity) -> f64 {
    match (polarity, level) {
        (_, Category::Medium) => 0.5,
        (CrowdPolarity::QuietPreferred, Category::Low) => 1.0,
        (CrowdPolarity::QuietPreferred, Category::High) => 0.0,
        (CrowdPolarity::BusyPreferred, Category::Low) => 0.0,
        (CrowdPolarity::BusyPreferred, Category::High) => 1.0,
    }
}
