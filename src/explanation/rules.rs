//! Insight rule table
//!
//! Rules are evaluated top to bottom. Within one criterion the first rule
//! whose predicate holds wins and the rest of that criterion is skipped, so
//! the table order is the priority order.

use crate::explanation::types::{InsightKind, LocationInsight};
use crate::metrics::Criterion;
use crate::scorer::ScoredLocation;
use crate::utils::Category;

pub const PRICE_STRONG_AFFORDABILITY: f64 = 0.7;
pub const PRICE_MILD_AFFORDABILITY: f64 = 0.6;
pub const PRICE_EXPENSIVE: f64 = 0.3;
/// Inclusive lower bound
pub const GREEN_SPACE_ADEQUATE_PERCENT: f64 = 25.0;
/// Exclusive upper bound
pub const GREEN_SPACE_LIMITED_PERCENT: f64 = 15.0;

pub const MSG_VERY_AFFORDABLE: &str = "Very affordable land price compared to other locations";
pub const MSG_AFFORDABLE: &str = "Fairly affordable land price";
pub const MSG_EXPENSIVE: &str = "Land price is relatively expensive";
pub const MSG_LOW_FLOOD_RISK: &str = "Low flood risk";
pub const MSG_HIGH_FLOOD_RISK: &str = "High flood risk";
pub const MSG_QUIET: &str = "Quiet surroundings";
pub const MSG_CROWDED: &str = "Crowded and busy surroundings";
pub const MSG_NEAR_FACILITIES: &str = "Close to public facilities";
pub const MSG_FAR_FACILITIES: &str = "Far from public facilities";
pub const MSG_GREEN_ADEQUATE: &str = "Adequate green space";
pub const MSG_GREEN_LIMITED: &str = "Limited green space";

/// One (predicate, message) pair
pub struct InsightRule {
    pub criterion: Criterion,
    pub kind: InsightKind,
    pub applies: fn(&ScoredLocation) -> bool,
    pub message: &'static str,
}

fn very_affordable(l: &ScoredLocation) -> bool {
    l.scores.price_score > PRICE_STRONG_AFFORDABILITY
}

fn affordable(l: &ScoredLocation) -> bool {
    l.scores.price_score > PRICE_MILD_AFFORDABILITY
}

fn expensive(l: &ScoredLocation) -> bool {
    l.scores.price_score < PRICE_EXPENSIVE
}

fn low_flood_risk(l: &ScoredLocation) -> bool {
    l.record.flood_risk == Category::Low
}

fn high_flood_risk(l: &ScoredLocation) -> bool {
    l.record.flood_risk == Category::High
}

fn quiet(l: &ScoredLocation) -> bool {
    l.record.crowd_level == Category::Low
}

fn crowded(l: &ScoredLocation) -> bool {
    l.record.crowd_level == Category::High
}

fn near_facilities(l: &ScoredLocation) -> bool {
    l.record.proximity_to_public_facilities == Category::High
}

fn far_from_facilities(l: &ScoredLocation) -> bool {
    l.record.proximity_to_public_facilities == Category::Low
}

fn green_adequate(l: &ScoredLocation) -> bool {
    l.record.green_space_percent >= GREEN_SPACE_ADEQUATE_PERCENT
}

fn green_limited(l: &ScoredLocation) -> bool {
    l.record.green_space_percent < GREEN_SPACE_LIMITED_PERCENT
}

pub static INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        criterion: Criterion::Price,
        kind: InsightKind::Advantage,
        applies: very_affordable,
        message: MSG_VERY_AFFORDABLE,
    },
    InsightRule {
        criterion: Criterion::Price,
        kind: InsightKind::Advantage,
        applies: affordable,
        message: MSG_AFFORDABLE,
    },
    InsightRule {
        criterion: Criterion::Price,
        kind: InsightKind::Disadvantage,
        applies: expensive,
        message: MSG_EXPENSIVE,
    },
    InsightRule {
        criterion: Criterion::FloodRisk,
        kind: InsightKind::Advantage,
        applies: low_flood_risk,
        message: MSG_LOW_FLOOD_RISK,
    },
    InsightRule {
        criterion: Criterion::FloodRisk,
        kind: InsightKind::Disadvantage,
        applies: high_flood_risk,
        message: MSG_HIGH_FLOOD_RISK,
    },
    InsightRule {
        criterion: Criterion::CrowdLevel,
        kind: InsightKind::Advantage,
        applies: quiet,
        message: MSG_QUIET,
    },
    InsightRule {
        criterion: Criterion::CrowdLevel,
        kind: InsightKind::Disadvantage,
        applies: crowded,
        message: MSG_CROWDED,
    },
    InsightRule {
        criterion: Criterion::Proximity,
        kind: InsightKind::Advantage,
        applies: near_facilities,
        message: MSG_NEAR_FACILITIES,
    },
    InsightRule {
        criterion: Criterion::Proximity,
        kind: InsightKind::Disadvantage,
        applies: far_from_facilities,
        message: MSG_FAR_FACILITIES,
    },
    InsightRule {
        criterion: Criterion::GreenSpace,
        kind: InsightKind::Advantage,
        applies: green_adequate,
        message: MSG_GREEN_ADEQUATE,
    },
    InsightRule {
        criterion: Criterion::GreenSpace,
        kind: InsightKind::Disadvantage,
        applies: green_limited,
        message: MSG_GREEN_LIMITED,
    },
];

/// Rules that fire for `location`, at most one per criterion, in table order
pub fn matching_rules(location: &ScoredLocation) -> Vec<&'static InsightRule> {
    let mut fired: Vec<&'static InsightRule> = Vec::new();

    for rule in INSIGHT_RULES {
        if fired.iter().any(|f| f.criterion == rule.criterion) {
            continue;
        }
        if (rule.applies)(location) {
            fired.push(rule);
        }
    }

    fired
}

/// Statements derived from scores and raw attributes alone
pub fn evaluate_rules(location: &ScoredLocation) -> LocationInsight {
    let mut insight = LocationInsight::default();
    for rule in matching_rules(location) {
        insight.push(rule.kind, rule.message);
    }
    insight
}
