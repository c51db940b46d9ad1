use crate::core::matcher::MatchError;
use crate::models::Location;
use geo::{HaversineDistance, Point};

/// Great-circle distance between two locations in meters
///
/// Uses the haversine formula on a spherical Earth of mean radius.
#[inline]
pub fn great_circle_distance(from: Location, to: Location) -> f64 {
    let a = Point::new(from.longitude, from.latitude);
    let b = Point::new(to.longitude, to.latitude);

    a.haversine_distance(&b)
}

impl Location {
    /// Parse a location from raw request parameters
    ///
    /// Both blank means no location. One blank, an unparsable value, or a
    /// coordinate outside the valid range is an `InvalidLocation`.
    pub fn from_params(latitude: &str, longitude: &str) -> Result<Option<Self>, MatchError> {
        let latitude = latitude.trim();
        let longitude = longitude.trim();

        match (latitude.is_empty(), longitude.is_empty()) {
            (true, true) => return Ok(None),
            (false, true) => {
                return Err(MatchError::InvalidLocation(
                    "latitude supplied without longitude".to_string(),
                ))
            }
            (true, false) => {
                return Err(MatchError::InvalidLocation(
                    "longitude supplied without latitude".to_string(),
                ))
            }
            (false, false) => {}
        }

        let lat = parse_degrees("latitude", latitude)?;
        let lon = parse_degrees("longitude", longitude)?;

        let location = Location::new(lat, lon);
        if !location.is_valid() {
            return Err(MatchError::InvalidLocation(format!(
                "coordinate out of range: latitude={} longitude={}",
                lat, lon
            )));
        }

        Ok(Some(location))
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, MatchError> {
    raw.parse::<f64>()
        .map_err(|e| MatchError::InvalidLocation(format!("failed to parse {} {:?}: {}", field, raw, e)))
}
