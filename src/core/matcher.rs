use crate::core::{
    dataset::Dataset,
    distance::great_circle_distance,
    filters::{contains_query, normalize_query},
    scoring::{distance_scores, final_score, string_score},
};
use crate::models::{Candidate, Location, Suggestion};
use thiserror::Error;

/// Errors that can occur while matching a request
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

/// Suggestion engine over an immutable dataset
///
/// # Pipeline Stages
/// 1. Substring filtering on the lowercased query
/// 2. String scoring (Jaro-Winkler)
/// 3. Distance scoring, min/max normalized (only with a location)
/// 4. Final score blending
///
/// Results keep dataset order; they are not sorted by score.
#[derive(Debug)]
pub struct Matcher {
    dataset: Dataset,
}

impl Matcher {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Find and score every place whose name contains `query`
    ///
    /// # Arguments
    /// * `query` - Raw query text, matched case-insensitively
    /// * `location` - Optional reference point for proximity scoring
    ///
    /// # Returns
    /// Candidates in dataset order
    pub fn find_matches(&self, query: &str, location: Option<Location>) -> Vec<Candidate<'_>> {
        let query = normalize_query(query);

        // Stage 1 & 2: filter and score text
        let mut candidates: Vec<Candidate<'_>> = self
            .dataset
            .iter()
            .filter(|record| contains_query(record, &query))
            .map(|record| Candidate::new(record, string_score(&query, &record.normalized_name)))
            .collect();

        // Stage 3 & 4: distance and blending
        if let Some(location) = location {
            let distances: Vec<f64> = candidates
                .iter()
                .map(|candidate| great_circle_distance(location, candidate.record.location()))
                .collect();

            let scores = distance_scores(&distances);

            for ((candidate, distance), score) in candidates.iter_mut().zip(distances).zip(scores) {
                candidate.distance = Some(distance);
                candidate.distance_score = Some(score);
                candidate.final_score = final_score(candidate.string_score, Some(score));
            }
        }

        tracing::debug!(
            "Matched query {:?} against {} places: {} candidates (location: {})",
            query,
            self.dataset.len(),
            candidates.len(),
            location.is_some()
        );

        candidates
    }

    /// Find matches and shape them for the response
    pub fn suggest(&self, query: &str, location: Option<Location>) -> Vec<Suggestion> {
        self.find_matches(query, location)
            .iter()
            .map(Suggestion::from)
            .collect()
    }

    /// Like `suggest`, taking the coordinate as raw request strings
    pub fn suggest_with_params(
        &self,
        query: &str,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<Suggestion>, MatchError> {
        let location = Location::from_params(latitude, longitude)?;
        Ok(self.suggest(query, location))
    }
}

impl From<&Candidate<'_>> for Suggestion {
    fn from(candidate: &Candidate<'_>) -> Self {
        Self {
            name: candidate.record.display_name.clone(),
            latitude: format_coordinate(candidate.record.latitude),
            longitude: format_coordinate(candidate.record.longitude),
            score: candidate.final_score,
        }
    }
}

/// Fixed five decimal formatting, independent of locale
#[inline]
pub fn format_coordinate(value: f64) -> String {
    format!("{:.5}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceRecord;

    fn create_matcher() -> Matcher {
        let rows = vec![
            vec!["2633352", "Wokingham", "", "", "51.4112", "-0.83565", "P", "PPLA2", "GB"],
            vec!["2633485", "Woking", "", "", "51.31903", "-0.55893", "P", "PPLA2", "GB"],
            vec!["2640729", "Oxford", "", "", "51.75222", "-1.25596", "P", "PPLA2", "GB"],
        ];
        Matcher::new(Dataset::build(rows, "GB").unwrap())
    }

    #[test]
    fn test_find_matches_filters_by_substring() {
        let matcher = create_matcher();
        let candidates = matcher.find_matches("WOK", None);

        let names: Vec<&str> = candidates.iter().map(|c| c.record.display_name.as_str()).collect();
        assert_eq!(names, vec!["Wokingham", "Woking"]);
    }

    #[test]
    fn test_find_matches_without_location() {
        let matcher = create_matcher();
        let candidates = matcher.find_matches("wok", None);

        for candidate in &candidates {
            assert_eq!(candidate.final_score, candidate.string_score);
            assert!(candidate.distance.is_none());
            assert!(candidate.distance_score.is_none());
        }
    }

    #[test]
    fn test_find_matches_with_location() {
        let matcher = create_matcher();
        let toronto = Location::new(43.70011, -79.4163);
        let candidates = matcher.find_matches("wok", Some(toronto));

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].distance_score, Some(1.0));
        assert_eq!(candidates[1].distance_score, Some(0.0));
        assert!((candidates[0].final_score - 0.9222222222222222).abs() < 1e-12);
        assert!((candidates[1].final_score - 0.4416666666666667).abs() < 1e-12);
    }

    #[test]
    fn test_single_candidate_with_location_is_finite() {
        let matcher = create_matcher();
        let candidates = matcher.find_matches("oxford", Some(Location::new(0.0, 0.0)));

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].distance_score, Some(1.0));
        assert!(candidates[0].final_score.is_finite());
    }

    #[test]
    fn test_results_are_not_sorted() {
        let matcher = create_matcher();
        // Woking scores higher on text alone but stays second
        let suggestions = matcher.suggest("wok", None);

        assert_eq!(suggestions[0].name, "Wokingham");
        assert_eq!(suggestions[1].name, "Woking");
        assert!(suggestions[1].score > suggestions[0].score);
    }

    #[test]
    fn test_short_query_keeps_prefix_boost() {
        let rows = vec![vec!["2634634", "Westward Ho", "", "", "51.03866", "-4.23608", "P", "PPL", "GB"]];
        let matcher = Matcher::new(Dataset::build(rows, "GB").unwrap());

        let suggestions = matcher.suggest("W", None);
        assert_eq!(suggestions.len(), 1);
        assert!((suggestions[0].score - 0.7272727272727272).abs() < 1e-12, "got {}", suggestions[0].score);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let matcher = create_matcher();
        assert_eq!(matcher.find_matches("", None).len(), 3);
    }

    #[test]
    fn test_no_matches() {
        let matcher = create_matcher();
        assert!(matcher.suggest("SomeCityInTheMiddleOfNowhere", None).is_empty());
    }

    #[test]
    fn test_suggest_with_params() {
        let matcher = create_matcher();

        let suggestions = matcher.suggest_with_params("Wok", "43.70011", "-79.4163").unwrap();
        assert_eq!(suggestions[0].latitude, "51.41120");
        assert_eq!(suggestions[0].longitude, "-0.83565");

        assert!(matches!(
            matcher.suggest_with_params("Wok", "43.70011", ""),
            Err(MatchError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(51.4112), "51.41120");
        assert_eq!(format_coordinate(-0.55893), "-0.55893");
        assert_eq!(format_coordinate(0.0), "0.00000");
    }

    #[test]
    fn test_suggestion_from_candidate() {
        let record = PlaceRecord::new("Bath", 51.3751, -2.36172);
        let candidate = Candidate::new(&record, 1.0);
        let suggestion = Suggestion::from(&candidate);

        assert_eq!(suggestion.name, "Bath");
        assert_eq!(suggestion.latitude, "51.37510");
        assert_eq!(suggestion.longitude, "-2.36172");
        assert_eq!(suggestion.score, 1.0);
    }
}
