use serde::{Deserialize, Serialize};

/// Which list a statement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Advantage,
    Disadvantage,
}

/// Advantages and disadvantages for one location, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInsight {
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl LocationInsight {
    /// Append a statement unless the same text is already in the target list.
    ///
    /// Returns whether it was added.
    pub fn push(&mut self, kind: InsightKind, text: &str) -> bool {
        let list = match kind {
            InsightKind::Advantage => &mut self.advantages,
            InsightKind::Disadvantage => &mut self.disadvantages,
        };

        if list.iter().any(|existing| existing == text) {
            return false;
        }
        list.push(text.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.advantages.is_empty() && self.disadvantages.is_empty()
    }

    /// The `(advantages, disadvantages)` pair
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.advantages, self.disadvantages)
    }
}
