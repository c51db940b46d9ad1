use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /suggestions`
///
/// Missing parameters deserialize to empty strings, so a request without a
/// location is indistinguishable from one with blank coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SuggestionsQuery {
    #[validate(length(max = 256))]
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}
