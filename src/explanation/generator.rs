use crate::explanation::knowledge_base::{mentions_price, KnowledgeBase};
use crate::explanation::rules::evaluate_rules;
use crate::explanation::types::{InsightKind, LocationInsight};
use crate::scorer::ScoredLocation;

/// Main insight generator
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    knowledge_base: KnowledgeBase,
}

impl InsightGenerator {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Generate the advantages and disadvantages for one location
    ///
    /// Rule statements come first, in rule order. Knowledge-base notes are
    /// appended after them, skipping price notes (the price rule owns that
    /// topic) and any text already present in the same list.
    pub fn generate_insight(&self, location: &ScoredLocation) -> LocationInsight {
        generate_insight(location, &self.knowledge_base)
    }
}

/// Free-function form of [`InsightGenerator::generate_insight`]
pub fn generate_insight(location: &ScoredLocation, knowledge_base: &KnowledgeBase) -> LocationInsight {
    let mut insight = evaluate_rules(location);

    let Some(entry) = knowledge_base.lookup(location.name()) else {
        return insight;
    };

    let notes = entry
        .advantages
        .iter()
        .map(|text| (InsightKind::Advantage, text))
        .chain(
            entry
                .disadvantages
                .iter()
                .map(|text| (InsightKind::Disadvantage, text)),
        );

    for (kind, text) in notes {
        if mentions_price(text) {
            tracing::trace!(location = location.name(), note = %text, "Skipping knowledge-base price note");
            continue;
        }
        insight.push(kind, text);
    }

    insight
}
