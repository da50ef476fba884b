//! Location records
//!
//! `RawLocationRow` is what an ingestion source hands over: every cell is
//! optional text. `LocationRecord` is the cleaned, immutable row the scorer
//! works on. Conversion never fails on malformed cells.

use serde::{Deserialize, Serialize};

use crate::utils::{coerce_number, normalize_category, Category};

/// Canonical key for a location name: lowercase with whitespace and hyphens removed.
///
/// "Kiara-Condong", "kiara condong" and "Kiaracondong" all map to "kiaracondong".
pub fn location_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// One cleaned input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    /// Base currency per square metre
    pub price_per_m2: f64,
    pub flood_risk: Category,
    pub crowd_level: Category,
    pub proximity_to_public_facilities: Category,
    /// 0-100
    pub green_space_percent: f64,
}

impl LocationRecord {
    pub fn new(
        name: impl Into<String>,
        price_per_m2: f64,
        flood_risk: Category,
        crowd_level: Category,
        proximity_to_public_facilities: Category,
        green_space_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price_per_m2,
            flood_risk,
            crowd_level,
            proximity_to_public_facilities,
            green_space_percent,
        }
    }

    /// Sanitized key used for knowledge-base and asset lookups
    pub fn key(&self) -> String {
        location_key(&self.name)
    }
}

/// Conversion options applied while cleaning raw rows
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Multiplier from the source price unit to base currency
    /// (e.g. 1_000_000 when the sheet lists prices in millions)
    pub price_scale: f64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { price_scale: 1.0 }
    }
}

/// One uncleaned input row, as read from a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLocationRow {
    pub name: Option<String>,
    pub price_per_m2: Option<String>,
    pub flood_risk: Option<String>,
    pub crowd_level: Option<String>,
    pub proximity_to_public_facilities: Option<String>,
    pub green_space_percent: Option<String>,
}

impl RawLocationRow {
    /// Clean the row into a `LocationRecord`.
    ///
    /// Returns `None` only when the name is missing or blank, since such a row
    /// cannot be identified. Every other defect is coerced (categories to
    /// medium, numbers to 0) and logged.
    pub fn into_record(self, options: &IngestOptions) -> Option<LocationRecord> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            tracing::warn!("Skipping row without a location name");
            return None;
        }

        let scaled = coerce_number(self.price_per_m2.as_deref(), "price_per_m2") * options.price_scale;
        let price = if scaled.is_finite() && scaled >= 0.0 {
            scaled
        } else {
            tracing::warn!(
                location = name,
                value = scaled,
                "Price per m2 is negative or out of range after scaling, coerced to 0"
            );
            0.0
        };

        let raw_green = coerce_number(self.green_space_percent.as_deref(), "green_space_percent");
        let green_space_percent = raw_green.clamp(0.0, 100.0);
        if green_space_percent != raw_green {
            tracing::warn!(
                location = name,
                value = raw_green,
                "Green space percentage outside 0-100, clamped"
            );
        }

        Some(LocationRecord {
            name: name.to_string(),
            price_per_m2: price,
            flood_risk: normalize_category(self.flood_risk.as_deref()),
            crowd_level: normalize_category(self.crowd_level.as_deref()),
            proximity_to_public_facilities: normalize_category(
                self.proximity_to_public_facilities.as_deref(),
            ),
            green_space_percent,
        })
    }
}

/// Clean a batch of raw rows, dropping the unidentifiable ones
pub fn clean_rows<I>(rows: I, options: &IngestOptions) -> Vec<LocationRecord>
where
    I: IntoIterator<Item = RawLocationRow>,
{
    rows.into_iter()
        .filter_map(|row| row.into_record(options))
        .collect()
}
