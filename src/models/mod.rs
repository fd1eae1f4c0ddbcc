// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, TagSet, IntentCategory, IntentClassification, MatchResult};
pub use requests::FindMatchesRequest;
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
