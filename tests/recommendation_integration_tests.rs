//! Recommendation Integration Tests
//!
//! Runs the full pipeline on the five Bandung districts: CSV text → cleaned
//! records → ranking → affordability → shortlist with insights.

use approx::assert_relative_eq;
use parcel_scorer::explanation::mentions_price;
use parcel_scorer::{
    aggregate, filter_affordable, normalize_category, Category, IngestOptions, LocationRecord,
    LocationScorer, LocationTable, PurchaseRequest, RecommendationStatus, ScoringConfig,
    ScoringError,
};

/// Prices in millions of rupiah per square metre
const BANDUNG_CSV: &str = "\
name,price_per_m2,flood_risk,crowd_level,proximity_to_public_facilities,green_space_percent
Panyileukan,3.5,sedang,rendah,sedang,22
Cidadap,6.0,rendah,rendah,sedang,35
Antapani,4.0,sedang,sedang,tinggi,18
Kiaracondong,3.0,tinggi,tinggi,tinggi,8
Coblong,9.0,rendah,tinggi,tinggi,20
";

fn load_bandung() -> Vec<LocationRecord> {
    LocationTable::from_csv_bytes(BANDUNG_CSV)
        .expect("sample CSV parses")
        .records(&IngestOptions {
            price_scale: 1_000_000.0,
        })
        .expect("sample CSV has all columns")
}

// =========================================================================
// Ranking properties
// =========================================================================

#[test]
fn test_scores_are_bounded_and_sorted() {
    let ranked = aggregate(&load_bandung(), &ScoringConfig::default()).unwrap();

    assert_eq!(ranked.len(), 5);
    for location in &ranked {
        assert!((0.0..=1.0).contains(&location.final_score));
        for (_, score) in location.criterion_profile() {
            assert!((0.0..=1.0).contains(&score));
        }
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[test]
fn test_final_score_within_criterion_extremes() {
    let ranked = aggregate(&load_bandung(), &ScoringConfig::default()).unwrap();

    for location in &ranked {
        let profile = location.criterion_profile();
        let lo = profile.iter().map(|(_, s)| *s).fold(f64::INFINITY, f64::min);
        let hi = profile.iter().map(|(_, s)| *s).fold(f64::NEG_INFINITY, f64::max);
        assert!(location.final_score >= lo - 1e-12);
        assert!(location.final_score <= hi + 1e-12);
    }
}

#[test]
fn test_price_extremes_of_population() {
    let ranked = aggregate(&load_bandung(), &ScoringConfig::default()).unwrap();

    let kiaracondong = ranked.iter().find(|l| l.name() == "Kiaracondong").unwrap();
    let coblong = ranked.iter().find(|l| l.name() == "Coblong").unwrap();
    assert_relative_eq!(kiaracondong.scores.price_score, 1.0);
    assert_relative_eq!(coblong.scores.price_score, 0.0);
}

#[test]
fn test_rescoring_after_population_change() {
    let mut records = load_bandung();
    let before = aggregate(&records, &ScoringConfig::default()).unwrap();
    let cidadap_before = before.iter().find(|l| l.name() == "Cidadap").unwrap().scores.price_score;

    // Dropping the most expensive location moves the top of the price range
    records.retain(|r| r.name != "Coblong");
    let after = aggregate(&records, &ScoringConfig::default()).unwrap();
    let cidadap_after = after.iter().find(|l| l.name() == "Cidadap").unwrap().scores.price_score;

    assert!(cidadap_after < cidadap_before);
    assert_relative_eq!(cidadap_after, 0.0);
}

#[test]
fn test_overflowing_scaled_price_keeps_scores_bounded() {
    let csv = "\
name,price_per_m2,flood_risk,crowd_level,proximity_to_public_facilities,green_space_percent
Good,3,rendah,rendah,tinggi,30
Huge,1e303,rendah,rendah,tinggi,30
Negative,-5,rendah,rendah,tinggi,30
";
    let records = LocationTable::from_csv_bytes(csv)
        .unwrap()
        .records(&IngestOptions {
            price_scale: 1_000_000.0,
        })
        .unwrap();
    let ranked = aggregate(&records, &ScoringConfig::default()).unwrap();

    assert_eq!(ranked.len(), 3);
    for location in &ranked {
        assert!(location.record.price_per_m2.is_finite());
        assert!(location.record.price_per_m2 >= 0.0);
        assert!((0.0..=1.0).contains(&location.final_score));
        assert!((0.0..=1.0).contains(&location.scores.price_score));
    }
    let good = ranked.iter().find(|l| l.name() == "Good").unwrap();
    assert_relative_eq!(good.record.price_per_m2, 3_000_000.0);
    assert_relative_eq!(good.scores.price_score, 0.0);
}

// =========================================================================
// Worked examples
// =========================================================================

#[test]
fn test_two_location_example() {
    let records = vec![
        LocationRecord::new("A", 1_000_000.0, Category::Low, Category::Low, Category::High, 30.0),
        LocationRecord::new("B", 2_000_000.0, Category::High, Category::High, Category::Low, 5.0),
    ];
    let ranked = aggregate(&records, &ScoringConfig::default()).unwrap();

    assert_eq!(ranked[0].name(), "A");
    assert_relative_eq!(ranked[0].scores.price_score, 1.0);
    assert_relative_eq!(ranked[1].scores.price_score, 0.0);
    assert!(ranked[0].final_score > ranked[1].final_score);
}

#[test]
fn test_budget_example() {
    let ranked = aggregate(&load_bandung(), &ScoringConfig::default()).unwrap();
    let affordable = filter_affordable(&ranked, 500_000_000.0, 100.0).into_locations();

    let mut names: Vec<&str> = affordable.iter().map(|l| l.name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Antapani", "Kiaracondong", "Panyileukan"]);
    for location in &affordable {
        assert!(location.record.price_per_m2 <= 5_000_000.0);
    }
}

// =========================================================================
// Full pipeline
// =========================================================================

#[test]
fn test_recommendation_pipeline() {
    let scorer = LocationScorer::default();
    let request = PurchaseRequest::new(650_000_000.0, 100.0, 3);
    let rec = scorer.recommend(&load_bandung(), &request).unwrap();

    assert_eq!(rec.status, RecommendationStatus::Affordable { matched: 4 });
    assert_eq!(rec.shortlist.len(), 3);
    assert!(rec.shortlist.iter().all(|s| s.location.name() != "Coblong"));

    for item in &rec.shortlist {
        let insight = &item.insight;

        let mut seen = std::collections::HashSet::new();
        assert!(insight.advantages.iter().all(|a| seen.insert(a)));
        let mut seen = std::collections::HashSet::new();
        assert!(insight.disadvantages.iter().all(|d| seen.insert(d)));

        // Knowledge-base price notes never get through
        let kb_notes = scorer.knowledge_base().lookup(item.location.name()).unwrap();
        for note in kb_notes.advantages.iter().chain(&kb_notes.disadvantages) {
            if mentions_price(note) {
                assert!(!insight.advantages.contains(note));
                assert!(!insight.disadvantages.contains(note));
            }
        }
    }
}

#[test]
fn test_recommendation_serializes_for_presentation() {
    let scorer = LocationScorer::default();
    let request = PurchaseRequest::new(650_000_000.0, 100.0, 2);
    let rec = scorer.recommend(&load_bandung(), &request).unwrap();

    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["status"]["kind"], "affordable");
    assert_eq!(json["status"]["matched"], 4);
    assert_eq!(json["shortlist"].as_array().unwrap().len(), 2);
    let first = &json["shortlist"][0]["location"];
    assert!(first["final_score"].is_number());
    assert!(first["total_price"].is_number());
    assert!(first["flood_risk"].is_string());
}

#[test]
fn test_empty_result_is_not_an_error() {
    let scorer = LocationScorer::default();
    let request = PurchaseRequest::new(100_000_000.0, 100.0, 3);
    let rec = scorer.recommend(&load_bandung(), &request).unwrap();

    assert_eq!(rec.status, RecommendationStatus::EmptyResult);
    assert!(rec.shortlist.is_empty());
    assert_eq!(rec.ranked.len(), 5);
}

#[test]
fn test_empty_table_is_invalid_input() {
    let csv = "name,price_per_m2,flood_risk,crowd_level,proximity_to_public_facilities,green_space_percent\n";
    let records = LocationTable::from_csv_bytes(csv)
        .unwrap()
        .records(&IngestOptions::default())
        .unwrap();
    assert!(records.is_empty());

    let scorer = LocationScorer::default();
    let request = PurchaseRequest::new(1.0, 1.0, 1);
    assert!(matches!(
        scorer.recommend(&records, &request),
        Err(ScoringError::InvalidInput(_))
    ));
}

#[test]
fn test_category_normalizer_is_total() {
    let inputs = [
        "", " ", "low", "medium", "high", "rendah", "sedang", "tinggi", "\u{FFFD}\u{200B}", "banjir",
    ];
    for raw in inputs {
        let category = normalize_category(Some(raw));
        assert!(matches!(category, Category::Low | Category::Medium | Category::High));
    }
    assert_eq!(normalize_category(Some("banjir")), Category::Medium);
}
