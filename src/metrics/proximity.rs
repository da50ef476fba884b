//! CRITERION: PROXIMITY TO PUBLIC FACILITIES
//!
//! Ordinal. Closer to schools, markets, clinics and transport is better.

use crate::utils::Category;

pub fn score_proximity(proximity: Category) -> f64 {
    match proximity {
        Category::Low => 0.0,
        Category::Medium => 0.5,
        Category::High => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proximity_mapping() {
        assert_eq!(score_proximity(Category::Low), 0.0);
        assert_eq!(score_proximity(Category::Medium), 0.5);
        assert_eq!(score_proximity(Category::High), 1.0);
    }
}
