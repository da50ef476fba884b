//! Static per-location knowledge base
//!
//! Local notes about each district that the criteria cannot express
//! (security, air quality, traffic). Looked up by [`location_key`], so
//! spelling variants such as "Kiara-Condong" resolve to the same entry.

use rustc_hash::FxHashMap;

use crate::records::location_key;

/// Advantages and disadvantages recorded for one location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new<A, D>(advantages: A, disadvantages: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            advantages: advantages.into_iter().map(Into::into).collect(),
            disadvantages: disadvantages.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// BUILT-IN ENTRIES (Bandung districts)
// ============================================================================

struct BuiltinEntry {
    name: &'static str,
    advantages: &'static [&'static str],
    disadvantages: &'static [&'static str],
}

static BUILTIN: &[BuiltinEntry] = &[
    BuiltinEntry {
        name: "Panyileukan",
        advantages: &[
            "Fairly good road access",
            "Reasonably comfortable neighbourhood",
            "Adequate public facilities",
        ],
        disadvantages: &["Security not as strong as in Coblong or Cidadap"],
    },
    BuiltinEntry {
        name: "Cidadap",
        advantages: &["Very good security", "Cool and fresh air"],
        disadvantages: &[
            "Access not as good as in Coblong",
            "Fewer facilities than the city centre",
        ],
    },
    BuiltinEntry {
        name: "Antapani",
        advantages: &["Fairly complete public facilities"],
        disadvantages: &["Average access and security"],
    },
    BuiltinEntry {
        name: "Kiaracondong",
        advantages: &["Many public transport options"],
        disadvantages: &["Low security", "Densely built-up neighbourhood"],
    },
    BuiltinEntry {
        name: "Coblong",
        advantages: &[
            "Best access in the city",
            "Very complete facilities",
            "Comfortable neighbourhood",
        ],
        disadvantages: &["Busy area with frequent traffic jams"],
    },
];

/// Words that mark a note as a price statement (English and Indonesian)
const PRICE_TERMS: &[&str] = &["price", "cheap", "expensive", "harga", "murah", "mahal"];

/// True when `text` talks about price; such notes are left to the price rule
pub fn mentions_price(text: &str) -> bool {
    let lower = text.to_lowercase();
    PRICE_TERMS.iter().any(|term| lower.contains(term))
}

/// Knowledge base keyed by sanitized location name
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: FxHashMap<String, KnowledgeEntry>,
}

impl KnowledgeBase {
    /// No entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in Bandung district notes
    pub fn builtin() -> Self {
        let mut kb = Self::empty();
        for entry in BUILTIN {
            kb.insert(
                entry.name,
                KnowledgeEntry::new(
                    entry.advantages.iter().copied(),
                    entry.disadvantages.iter().copied(),
                ),
            );
        }
        kb
    }

    /// Add or replace the entry for `name`
    pub fn insert(&mut self, name: &str, entry: KnowledgeEntry) {
        self.entries.insert(location_key(name), entry);
    }

    /// Entry for a location name in any spelling; `None` for unknown names
    pub fn lookup(&self, name: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(&location_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
