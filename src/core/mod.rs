// Core algorithm exports
pub mod dataset;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use dataset::{Dataset, DataError, DEFAULT_REGION_CODE};
pub use distance::great_circle_distance;
pub use filters::{contains_query, in_region, normalize_query};
pub use matcher::{Matcher, MatchError, format_coordinate};
pub use scoring::{distance_scores, final_score, string_score};
