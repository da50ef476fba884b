//! Numeric coercion for ingested cells
//!
//! Spreadsheet exports carry numbers as text, sometimes with a percent sign or
//! digit-group separators. Anything that cannot be read as a finite number
//! becomes 0 and is logged.

/// Parse a raw numeric cell, falling back to 0.0.
///
/// `field` is only used for the warning emitted on fallback.
pub fn coerce_number(raw: Option<&str>, field: &str) -> f64 {
    let Some(raw) = raw else {
        tracing::warn!(field, "Missing numeric value, using 0");
        return 0.0;
    };

    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!(field, value = raw, "Unparseable numeric value, using 0");
            0.0
        }
    }
}
