//! City Suggestions - in-memory place name suggestion service
//!
//! Given a partial query and an optional coordinate, returns matching city
//! names scored by string similarity and, when a coordinate is supplied,
//! relative proximity.

pub mod args;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Dataset, DataError, Matcher, MatchError, great_circle_distance};
pub use crate::models::{PlaceRecord, Location, Candidate, Suggestion, SuggestionsResponse};
