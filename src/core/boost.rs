use crate::core::scoring::MAX_SCORE;
use crate::models::{IntentCategory, IntentClassification, Profile};

/// Points per intent keyword found in the candidate's profile text
pub const KEYWORD_MATCH_POINTS: f64 = 10.0;

/// Points when the candidate's goals line up with the intent category
pub const CROSS_BONUS_POINTS: f64 = 15.0;

/// Apply the intent boost to a base score
///
/// Adds keyword and goal bonuses, scales by the category multiplier and caps
/// the result at 100. The multiplier applies even when nothing matched.
pub fn apply_boost(
    base_score: f64,
    classification: &IntentClassification,
    candidate: &Profile,
) -> f64 {
    let combined = (base_score
        + keyword_score(classification, candidate)
        + cross_bonus(classification.category, candidate))
        * classification.boost_multiplier;

    combined.min(MAX_SCORE)
}

/// Lower-cased text searched for intent keywords: goals, tags, bio, major
pub fn profile_text(candidate: &Profile) -> String {
    [
        candidate.looking_for.joined_lowercase(),
        candidate.tags.joined_lowercase(),
        candidate.bio.to_lowercase(),
        candidate.major.to_lowercase(),
    ]
    .join(" ")
}

/// 10 points per keyword entry contained in the profile text
///
/// Repeated keywords are counted once per occurrence in the list.
pub fn keyword_score(classification: &IntentClassification, candidate: &Profile) -> f64 {
    if classification.keywords.is_empty() {
        return 0.0;
    }

    let text = profile_text(candidate);
    let hits = classification
        .keywords
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .count();

    hits as f64 * KEYWORD_MATCH_POINTS
}

/// Goal phrases that earn the cross bonus for each category
fn cross_bonus_terms(category: IntentCategory) -> &'static [&'static str] {
    match category {
        IntentCategory::Teammate => &["study", "project"],
        IntentCategory::Study => &["study"],
        IntentCategory::Friend => &["friend", "social"],
        IntentCategory::Hobby => &["hobby", "gaming"],
        IntentCategory::General => &[],
    }
}

/// 15 points if the candidate's `looking_for` mentions a term for the category
pub fn cross_bonus(category: IntentCategory, candidate: &Profile) -> f64 {
    let goals = candidate.looking_for.joined_lowercase();

    if cross_bonus_terms(category).iter().any(|term| goals.contains(term)) {
        CROSS_BONUS_POINTS
    } else {
        0.0
    }
}
