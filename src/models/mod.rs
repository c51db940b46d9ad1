// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PlaceRecord, Location, Candidate};
pub use requests::SuggestionsQuery;
pub use responses::{SuggestionsResponse, Suggestion, HealthResponse, ErrorResponse};
