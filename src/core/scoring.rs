use strsim::jaro;

/// Weight of the distance score when a location is supplied
pub const DISTANCE_WEIGHT: f64 = 0.5;
/// Weight of the string score when a location is supplied
pub const STRING_WEIGHT: f64 = 0.5;

/// Winkler prefix scaling factor
const PREFIX_SCALE: f64 = 0.1;
/// Longest common prefix the boost counts
const MAX_PREFIX: usize = 4;

/// Textual similarity (0-1) between a normalized query and a normalized name
///
/// Jaro-Winkler: Jaro similarity boosted by the common prefix (up to four
/// characters) with a scaling factor of 0.1. The boost applies at every Jaro
/// score, so short queries against long names keep their prefix credit.
#[inline]
pub fn string_score(normalized_query: &str, normalized_name: &str) -> f64 {
    let similarity = jaro(normalized_query, normalized_name);
    let prefix = normalized_query
        .chars()
        .zip(normalized_name.chars())
        .take(MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count();

    similarity + PREFIX_SCALE * prefix as f64 * (1.0 - similarity)
}

/// Normalize distances into scores (0-1), nearest = 1 and farthest = 0
///
/// score = 1 - (distance - min) / (max - min)
///
/// When every distance is equal (including a single candidate) all scores
/// are 1.0.
pub fn distance_scores(distances: &[f64]) -> Vec<f64> {
    let (min, max) = distances
        .iter()
        .fold((f64::MAX, 0.0_f64), |(min, max), &d| (min.min(d), max.max(d)));

    let span = max - min;
    if !(span > 0.0) {
        return vec![1.0; distances.len()];
    }

    distances
        .iter()
        .map(|&d| 1.0 - (d - min) / span)
        .collect()
}

/// Combine the string score with an optional distance score
#[inline]
pub fn final_score(string_score: f64, distance_score: Option<f64>) -> f64 {
    match distance_score {
        Some(distance_score) => DISTANCE_WEIGHT * distance_score + STRING_WEIGHT * string_score,
        None => string_score,
    }
}
