use crate::models::Profile;

/// Bonus for an exact match on major
pub const SAME_MAJOR_BONUS: f64 = 5.0;

/// Bonus for an exact match on year
pub const SAME_YEAR_BONUS: f64 = 5.0;

/// Upper bound of every final score
pub const MAX_SCORE: f64 = 100.0;

/// Calculate the base compatibility score between requester and candidate
///
/// Scoring formula:
/// score = (
///     |common tags| / |all tags| * 100 +   # Jaccard overlap as a percentage
///     5 if same major +
///     5 if same year
/// )
///
/// The result is not clamped; clamping happens after the intent boost.
/// Common tags are listed in the requester's tag order.
pub fn base_score(requester: &Profile, candidate: &Profile) -> (f64, Vec<String>) {
    let (overlap, common_tags) = tag_overlap_score(requester, candidate);

    let score = overlap
        + categorical_bonus(&requester.major, &candidate.major, SAME_MAJOR_BONUS)
        + categorical_bonus(&requester.year, &candidate.year, SAME_YEAR_BONUS);

    (score, common_tags)
}

/// Tag overlap as a percentage of the union (0-100)
#[inline]
fn tag_overlap_score(requester: &Profile, candidate: &Profile) -> (f64, Vec<String>) {
    let candidate_tags = candidate.tags.as_lookup();

    let common_tags: Vec<String> = requester
        .tags
        .iter()
        .filter(|tag| candidate_tags.contains(tag.as_str()))
        .cloned()
        .collect();

    // Both are sets, so the union size follows from inclusion-exclusion
    let union_size = requester.tags.len() + candidate.tags.len() - common_tags.len();

    let score = if union_size > 0 {
        common_tags.len() as f64 / union_size as f64 * 100.0
    } else {
        0.0
    };

    (score, common_tags)
}

#[inline]
fn categorical_bonus(a: &str, b: &str, bonus: f64) -> f64 {
    if a == b { bonus } else { 0.0 }
}
