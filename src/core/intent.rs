use crate::models::{IntentCategory, IntentClassification};

/// A category rule: trigger substrings, the multiplier it earns, and the
/// keywords it seeds into the classification
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: IntentCategory,
    pub triggers: &'static [&'static str],
    pub boost_multiplier: f64,
    pub seed_keywords: &'static [&'static str],
}

impl CategoryRule {
    #[inline]
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }
}

/// Category rules in priority order. Evaluated top-down; the first rule with a
/// trigger contained in the text wins.
pub const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        category: IntentCategory::Teammate,
        triggers: &["teammate", "team", "project", "hackathon", "collaborat"],
        boost_multiplier: 1.5,
        seed_keywords: &["teammate", "team", "project", "collaboration", "hackathon"],
    },
    CategoryRule {
        category: IntentCategory::Study,
        triggers: &["study", "homework", "class", "course"],
        boost_multiplier: 1.4,
        seed_keywords: &["study", "homework", "class", "course", "academic"],
    },
    CategoryRule {
        category: IntentCategory::Friend,
        triggers: &["friend", "hangout", "social", "chat"],
        boost_multiplier: 1.3,
        seed_keywords: &["friend", "social", "hangout", "chat"],
    },
    CategoryRule {
        category: IntentCategory::Hobby,
        triggers: &["hobby", "gaming", "sport", "music", "gym", "fitness"],
        boost_multiplier: 1.35,
        seed_keywords: &["hobby", "gaming", "sport", "music", "gym", "fitness"],
    },
];

/// Request verbs that never count as content keywords
pub const STOP_WORDS: [&str; 7] = ["looking", "for", "want", "need", "find", "seeking", "searching"];

/// Tokens must be longer than this (in characters) to become keywords
const MIN_KEYWORD_CHARS: usize = 3;

/// Classify free-text intent into a category, keyword list and boost multiplier
///
/// Blank text yields the `general` classification with no keywords. Otherwise
/// the lower-cased text is matched against [`CATEGORY_RULES`] and every content
/// word is appended after the winning rule's seed keywords. Duplicates are kept.
pub fn classify(text: &str) -> IntentClassification {
    if text.trim().is_empty() {
        return IntentClassification::general();
    }

    let lowered = text.to_lowercase();

    let (category, boost_multiplier, mut keywords) =
        match CATEGORY_RULES.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => (
                rule.category,
                rule.boost_multiplier,
                rule.seed_keywords.iter().map(|k| k.to_string()).collect::<Vec<String>>(),
            ),
            None => (IntentCategory::General, 1.0, Vec::new()),
        };

    keywords.extend(content_words(&lowered).map(str::to_string));

    IntentClassification {
        category,
        keywords,
        boost_multiplier,
    }
}

/// Whitespace tokens longer than three characters that are not stop words
fn content_words(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS && !STOP_WORDS.contains(word))
}
