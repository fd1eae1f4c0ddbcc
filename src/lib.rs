//! Campus Match - intent-aware match scoring for the campus social app
//!
//! This library ranks other students for a requesting user by blending tag
//! overlap, shared major/year and a free-text intent ("looking for hackathon
//! teammates") into a single 0-100 score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, RankResult, classify, base_score, apply_boost, rank};
pub use models::{Profile, TagSet, IntentCategory, IntentClassification, MatchResult, FindMatchesRequest, FindMatchesResponse};
