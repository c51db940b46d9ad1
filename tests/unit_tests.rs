// Unit tests for the matching and scoring core

use city_suggestions::core::{
    contains_query, distance_scores, final_score, format_coordinate, great_circle_distance,
    normalize_query, string_score, Dataset, Matcher,
};
use city_suggestions::models::Location;

fn create_matcher() -> Matcher {
    let rows: Vec<Vec<String>> = [
        ("Kingston upon Thames", 51.41259, -0.2974),
        ("Kingston upon Hull", 53.7446, -0.33525),
        ("Kingswood", 51.45278, -2.50833),
        ("Hastings", 50.85568, 0.57545),
        ("Basingstoke", 51.26249, -1.08708),
    ]
    .iter()
    .map(|(name, lat, lon)| {
        vec![
            "0".to_string(),
            name.to_string(),
            name.to_string(),
            String::new(),
            lat.to_string(),
            lon.to_string(),
            "P".to_string(),
            "PPL".to_string(),
            "GB".to_string(),
        ]
    })
    .collect();

    Matcher::new(Dataset::build(rows, "GB").unwrap())
}

#[test]
fn test_every_candidate_contains_query() {
    let matcher = create_matcher();

    for query in ["KING", "ing", "upon", "s", ""] {
        let normalized = normalize_query(query);
        for candidate in matcher.find_matches(query, None) {
            assert!(contains_query(candidate.record, &normalized));
            assert!(candidate.record.normalized_name.contains(&normalized));
        }
    }
}

#[test]
fn test_scores_within_unit_interval() {
    let matcher = create_matcher();
    let location = Location::new(52.0, -1.0);

    for candidate in matcher.find_matches("ing", Some(location)) {
        assert!((0.0..=1.0).contains(&candidate.string_score));
        assert!((0.0..=1.0).contains(&candidate.distance_score.unwrap()));
        assert!((0.0..=1.0).contains(&candidate.final_score));
        assert!(candidate.distance.unwrap() >= 0.0);
    }
}

#[test]
fn test_nearest_and_farthest_candidates() {
    let matcher = create_matcher();
    // Standing in Kingston upon Thames
    let location = Location::new(51.41259, -0.2974);
    let candidates = matcher.find_matches("kingston", Some(location));

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].distance_score, Some(1.0));
    assert_eq!(candidates[1].distance_score, Some(0.0));
    assert!(candidates[0].distance.unwrap() < 1.0);
}

#[test]
fn test_equidistant_candidates_do_not_produce_nan() {
    let rows = vec![
        vec!["1", "Twin Oaks", "", "", "10.0", "20.0", "P", "PPL", "GB"],
        vec!["2", "Twin Lakes", "", "", "10.0", "20.0", "P", "PPL", "GB"],
    ];
    let matcher = Matcher::new(Dataset::build(rows, "GB").unwrap());

    for candidate in matcher.find_matches("twin", Some(Location::new(0.0, 0.0))) {
        assert_eq!(candidate.distance_score, Some(1.0));
        assert!(candidate.final_score.is_finite());
    }
}

#[test]
fn test_match_is_idempotent() {
    let matcher = create_matcher();
    let location = Some(Location::new(51.5, -0.12));

    let first = matcher.suggest("s", location);
    let second = matcher.suggest("s", location);
    assert_eq!(first, second);
}

#[test]
fn test_suggestions_keep_dataset_order() {
    let matcher = create_matcher();
    let names: Vec<String> = matcher
        .suggest("ing", None)
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(
        names,
        vec!["Kingston upon Thames", "Kingston upon Hull", "Kingswood", "Hastings", "Basingstoke"]
    );
}

#[test]
fn test_scoring_helpers() {
    assert!(string_score("bas", "basingstoke") > string_score("bas", "hastings"));
    assert_eq!(distance_scores(&[5.0, 10.0]), vec![1.0, 0.0]);
    assert_eq!(final_score(0.4, Some(0.6)), 0.5 * 0.6 + 0.5 * 0.4);
}

#[test]
fn test_distance_accuracy() {
    // Toronto to Wokingham, roughly 5,700 km
    let distance = great_circle_distance(
        Location::new(43.70011, -79.4163),
        Location::new(51.4112, -0.83565),
    );
    assert!((distance - 5_700_000.0).abs() < 100_000.0, "got {}", distance);
}

#[test]
fn test_location_from_params_round_trip() {
    let location = Location::from_params("51.4112", "-0.83565").unwrap().unwrap();
    assert_eq!(format_coordinate(location.latitude), "51.41120");
    assert_eq!(format_coordinate(location.longitude), "-0.83565");
}
