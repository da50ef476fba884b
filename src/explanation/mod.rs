pub mod generator;
pub mod knowledge_base;
pub mod rules;
pub mod types;

pub use types::{InsightKind, LocationInsight};

pub use generator::{generate_insight, InsightGenerator};
pub use knowledge_base::{mentions_price, KnowledgeBase, KnowledgeEntry};
pub use rules::{evaluate_rules, matching_rules, InsightRule, INSIGHT_RULES};
