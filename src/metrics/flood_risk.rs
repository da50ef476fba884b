//! CRITERION: FLOOD RISK
//!
//! Ordinal. Lower risk is strictly better.

use crate::utils::Category;

pub fn score_flood_risk(risk: Category) -> f64 {
    match risk {
        Category::Low => 1.0,
        Category::Medium => 0.5,
        Category::High => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flood_mapping() {
        assert_eq!(score_flood_risk(Category::Low), 1.0);
        assert_eq!(score_flood_risk(Category::Medium), 0.5);
        assert_eq!(score_flood_risk(Category::High), 0.0);
    }
}
