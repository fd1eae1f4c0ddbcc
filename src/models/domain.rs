use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Insertion-ordered set of free-form strings (tags, goals)
///
/// Duplicates collapse on construction. Membership is what matters for scoring;
/// the retained order only decides how `commonTags` is listed.
/// A missing or `null` array deserializes to the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct TagSet {
    items: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning false if it was already present
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Borrowed hash view for repeated membership checks
    pub fn as_lookup(&self) -> HashSet<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    /// Space-joined, lower-cased rendering used for substring matching
    pub fn joined_lowercase(&self) -> String {
        self.items.join(" ").to_lowercase()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Option<Vec<String>>> for TagSet {
    fn from(values: Option<Vec<String>>) -> Self {
        values.map(TagSet::from).unwrap_or_default()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Student profile as stored in the `profiles` table
///
/// Field names follow the store's column names. Every field other than `id`
/// falls back to an empty value when missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub major: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default)]
    pub looking_for: TagSet,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coarse classification of free-text intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentCategory {
    Teammate,
    Study,
    Friend,
    Hobby,
    General,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Teammate => "teammate",
            IntentCategory::Study => "study",
            IntentCategory::Friend => "friend",
            IntentCategory::Hobby => "hobby",
            IntentCategory::General => "general",
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a requester's intent text, built once per ranking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentClassification {
    pub category: IntentCategory,
    pub keywords: Vec<String>,
    pub boost_multiplier: f64,
}

impl IntentClassification {
    /// Classification used when no intent text was supplied
    pub fn general() -> Self {
        Self {
            category: IntentCategory::General,
            keywords: Vec::new(),
            boost_multiplier: 1.0,
        }
    }
}

/// Ranked candidate: the candidate profile plus its score and shared tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "commonTags")]
    pub common_tags: Vec<String>,
}
