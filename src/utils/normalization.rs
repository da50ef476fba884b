//! Normalization Utilities
//!
//! Population-relative min-max scaling onto [0, 1]. The range is taken from
//! the full record set being scored, so every score must be recomputed when
//! the population changes.

use serde::{Deserialize, Serialize};

/// Observed extremes of one continuous criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationRange {
    pub min: f64,
    pub max: f64,
}

/// Direction in which raw values become more desirable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower raw value scores higher (price)
    LowerIsBetter,
    /// Higher raw value scores higher (green space)
    HigherIsBetter,
}

impl PopulationRange {
    /// Range over a set of values; `None` for an empty set.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// True when every value in the population is identical
    pub fn is_degenerate(&self) -> bool {
        self.max - self.min <= 0.0
    }

    /// Scale `value` onto [0, 1].
    ///
    /// Degenerate ranges give 1.0 for every value: nothing discriminates the
    /// population, so all records are treated as equally favorable.
    /// Non-finite inputs never produce NaN; the least favorable score is
    /// returned instead.
    pub fn normalize(&self, value: f64, direction: Direction) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }

        let span = self.max - self.min;
        let score = match direction {
            Direction::LowerIsBetter => (self.max - value) / span,
            Direction::HigherIsBetter => (value - self.min) / span,
        };

        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_range_from_values() {
        let range = PopulationRange::from_values([3.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(range.min, 1.0);
        assert_relative_eq!(range.max, 3.0);
        assert!(PopulationRange::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn test_lower_is_better() {
        let range = PopulationRange { min: 1_000_000.0, max: 2_000_000.0 };
        assert_relative_eq!(range.normalize(1_000_000.0, Direction::LowerIsBetter), 1.0);
        assert_relative_eq!(range.normalize(2_000_000.0, Direction::LowerIsBetter), 0.0);
        assert_relative_eq!(range.normalize(1_250_000.0, Direction::LowerIsBetter), 0.75);
    }

    #[test]
    fn test_higher_is_better() {
        let range = PopulationRange { min: 5.0, max: 30.0 };
        assert_relative_eq!(range.normalize(30.0, Direction::HigherIsBetter), 1.0);
        assert_relative_eq!(range.normalize(5.0, Direction::HigherIsBetter), 0.0);
        assert_relative_eq!(range.normalize(17.5, Direction::HigherIsBetter), 0.5);
    }

    #[test]
    fn test_unbounded_range_stays_finite() {
        let range = PopulationRange { min: 3_000_000.0, max: f64::INFINITY };
        for value in [3_000_000.0, f64::INFINITY, f64::NAN] {
            let low = range.normalize(value, Direction::LowerIsBetter);
            let high = range.normalize(value, Direction::HigherIsBetter);
            assert!((0.0..=1.0).contains(&low));
            assert!((0.0..=1.0).contains(&high));
        }
    }

    #[test]
    fn test_degenerate_range_scores_one() {
        let range = PopulationRange { min: 7.0, max: 7.0 };
        assert!(range.is_degenerate());
        assert_relative_eq!(range.normalize(7.0, Direction::LowerIsBetter), 1.0);
        assert_relative_eq!(range.normalize(7.0, Direction::HigherIsBetter), 1.0);
    }
}
