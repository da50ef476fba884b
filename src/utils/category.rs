//! Category Normalization
//!
//! Maps free-text, bilingual (English / Indonesian) category labels onto the
//! canonical three-level ordinal scale used by the flood risk, crowd level and
//! public facility proximity criteria.

use serde::{Deserialize, Serialize};

// ============================================================================
// ORDINAL CATEGORY
// ============================================================================

/// Canonical ordinal category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    #[default]
    Medium,
    High,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Medium => "medium",
            Category::High => "high",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Recognized labels after lower-casing and trimming
const VOCABULARY: &[(&str, Category)] = &[
    ("low", Category::Low),
    ("rendah", Category::Low),
    ("medium", Category::Medium),
    ("sedang", Category::Medium),
    ("high", Category::High),
    ("tinggi", Category::High),
];

/// Look up a label without logging; `None` when the label is not in the vocabulary.
pub fn lookup_category(raw: &str) -> Option<Category> {
    let label = raw.trim().to_lowercase();
    VOCABULARY
        .iter()
        .find(|(token, _)| *token == label)
        .map(|(_, category)| *category)
}

/// Normalize a raw category label.
///
/// Missing input and unrecognized labels resolve to [`Category::Medium`].
/// Never fails; unrecognized non-empty labels are logged as warnings.
pub fn normalize_category(raw: Option<&str>) -> Category {
    let Some(raw) = raw else {
        return Category::Medium;
    };

    match lookup_category(raw) {
        Some(category) => category,
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(value = raw, "Unrecognized category label, defaulting to medium");
            }
            Category::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tokens() {
        assert_eq!(normalize_category(Some("low")), Category::Low);
        assert_eq!(normalize_category(Some("medium")), Category::Medium);
        assert_eq!(normalize_category(Some("high")), Category::High);
    }

    #[test]
    fn test_indonesian_tokens() {
        assert_eq!(normalize_category(Some("rendah")), Category::Low);
        assert_eq!(normalize_category(Some("sedang")), Category::Medium);
        assert_eq!(normalize_category(Some("tinggi")), Category::High);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize_category(Some("  Tinggi ")), Category::High);
        assert_eq!(normalize_category(Some("LOW")), Category::Low);
        assert_eq!(normalize_category(Some("\tRendah\n")), Category::Low);
    }

    #[test]
    fn test_missing_and_unknown_default_to_medium() {
        assert_eq!(normalize_category(None), Category::Medium);
        assert_eq!(normalize_category(Some("")), Category::Medium);
        assert_eq!(normalize_category(Some("very high")), Category::Medium);
        assert_eq!(normalize_category(Some("\u{1F30A}\u{0000}??")), Category::Medium);
        assert_eq!(normalize_category(Some("lowish")), Category::Medium);
        assert_eq!(Category::default(), Category::Medium);
    }

    #[test]
    fn test_lookup_reports_unknown() {
        assert_eq!(lookup_category("sedang"), Some(Category::Medium));
        assert_eq!(lookup_category("banjir"), None);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Category::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
