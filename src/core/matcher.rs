use crate::models::{IntentClassification, MatchResult, Profile};
use crate::core::{
    boost::apply_boost,
    intent::classify,
    scoring::{base_score, MAX_SCORE},
};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<MatchResult>,
    pub classification: IntentClassification,
    pub total_candidates: usize,
}

/// Main ranking orchestrator
///
/// # Pipeline Stages
/// 1. Intent classification (once per request)
/// 2. Base compatibility scoring per candidate
/// 3. Intent boost (skipped when no intent text is supplied)
/// 4. Filtering of non-positive scores and ranking
#[derive(Debug, Clone, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Rank candidates for a requester
    ///
    /// # Arguments
    /// * `requester` - The profile of the user asking for matches
    /// * `candidates` - Snapshot of every other profile
    /// * `intent` - Optional free-text intent; blank text counts as absent
    ///
    /// # Returns
    /// RankResult with matches sorted by score, highest first. Equal scores
    /// keep their input order.
    pub fn rank(
        &self,
        requester: &Profile,
        candidates: Vec<Profile>,
        intent: Option<&str>,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let intent = intent.filter(|text| !text.trim().is_empty());

        let classification = match intent {
            Some(text) => classify(text),
            None => IntentClassification::general(),
        };

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let (base, common_tags) = base_score(requester, &candidate);

                let score = match intent {
                    Some(_) => apply_boost(base, &classification, &candidate),
                    None => base.min(MAX_SCORE),
                };

                if score > 0.0 {
                    Some(MatchResult {
                        profile: candidate,
                        match_score: score,
                        common_tags,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, so ties keep candidate order
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        RankResult {
            matches,
            classification,
            total_candidates,
        }
    }
}

/// Convenience wrapper returning only the ordered matches
pub fn rank(requester: &Profile, candidates: Vec<Profile>, intent: Option<&str>) -> Vec<MatchResult> {
    Matcher::new().rank(requester, candidates, intent).matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntentCategory;

    fn create_candidate(id: &str, tags: &[&str], major: &str, looking_for: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("User {}", id),
            major: major.to_string(),
            year: "Junior".to_string(),
            tags: tags.iter().copied().collect(),
            looking_for: looking_for.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn create_requester() -> Profile {
        Profile {
            id: "current_user".to_string(),
            major: "Computer Science".to_string(),
            year: "Sophomore".to_string(),
            tags: ["AI", "Hackathon"].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hackathon_scenario() {
        let matcher = Matcher::new();
        let requester = create_requester();

        let candidates = vec![
            create_candidate("b", &["Gym"], "Business", &[]),
            create_candidate("a", &["AI", "Hackathon", "Python"], "Computer Science", &[]),
        ];

        let result = matcher.rank(&requester, candidates, Some("Looking for hackathon teammates"));

        assert_eq!(result.classification.category, IntentCategory::Teammate);
        assert_eq!(result.classification.boost_multiplier, 1.5);
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.id, "a");
        assert!(result.matches[0].match_score > 200.0 / 3.0 + 5.0);
        assert_eq!(result.matches[0].common_tags, vec!["AI", "Hackathon"]);
    }

    #[test]
    fn test_no_intent_keeps_base_score() {
        let matcher = Matcher::new();
        let requester = create_requester();
        let candidates = vec![create_candidate("1", &["Jazz"], "Computer Science", &[])];

        let result = matcher.rank(&requester, candidates, None);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].match_score, 5.0);
    }

    #[test]
    fn test_blank_intent_equals_no_intent() {
        let matcher = Matcher::new();
        let requester = create_requester();
        let candidates = vec![
            create_candidate("1", &["AI"], "Computer Science", &["Study friends"]),
            create_candidate("2", &["Hackathon", "Gym"], "Math", &[]),
        ];

        let with_blank = matcher.rank(&requester, candidates.clone(), Some("  "));
        let without = matcher.rank(&requester, candidates, None);

        assert_eq!(with_blank.matches, without.matches);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::new();
        let requester = create_requester();
        let candidates: Vec<Profile> = ["x", "y", "z"]
            .iter()
            .map(|id| create_candidate(id, &["AI"], "Computer Science", &[]))
            .collect();

        let result = matcher.rank(&requester, candidates, None);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_zero_scores_filtered() {
        let matcher = Matcher::new();
        let requester = create_requester();
        let candidates = vec![create_candidate("1", &["Gym"], "Business", &[])];

        let result = matcher.rank(&requester, candidates, None);

        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_empty_candidate_set() {
        let result = Matcher::new().rank(&create_requester(), vec![], Some("study"));
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
