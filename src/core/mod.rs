// Core algorithm exports
pub mod boost;
pub mod intent;
pub mod matcher;
pub mod scoring;

pub use boost::{apply_boost, cross_bonus, keyword_score, profile_text};
pub use intent::{classify, CategoryRule, CATEGORY_RULES, STOP_WORDS};
pub use matcher::{rank, Matcher, RankResult};
pub use scoring::{base_score, MAX_SCORE};
