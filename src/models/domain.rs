use serde::{Deserialize, Serialize};

/// A single place held in memory by the dataset
///
/// `normalized_name` is derived from `display_name` once at construction
/// and is what queries are matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "normalizedName")]
    pub normalized_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceRecord {
    pub fn new(display_name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        let display_name = display_name.into();
        let normalized_name = display_name.to_lowercase();

        Self {
            display_name,
            normalized_name,
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Finite and within [-90, 90] / [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Per-request scored match
///
/// Borrows its record from the dataset and never outlives the match call
/// that produced it. Distance fields are only set when a location was given.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub record: &'a PlaceRecord,
    pub string_score: f64,
    pub distance: Option<f64>,
    pub distance_score: Option<f64>,
    pub final_score: f64,
}

impl<'a> Candidate<'a> {
    pub fn new(record: &'a PlaceRecord, string_score: f64) -> Self {
        Self {
            record,
            string_score,
            distance: None,
            distance_score: None,
            final_score: string_score,
        }
    }
}
