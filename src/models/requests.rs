use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank other students for a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId", default, deserialize_with = "null_as_empty")]
    pub user_id: String,
    #[serde(alias = "user_intent", rename = "userIntent", default)]
    pub user_intent: Option<String>,
    /// Optional cap on returned matches; absent means every positive match
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FindMatchesRequest {
    /// Intent text, or `None` when omitted or blank
    pub fn intent(&self) -> Option<&str> {
        self.user_intent
            .as_deref()
            .filter(|intent| !intent.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_id_fails_validation() {
        let req: FindMatchesRequest = serde_json::from_str(r#"{"userIntent":"study"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_null_user_id_fails_validation() {
        let req: FindMatchesRequest =
            serde_json::from_str(r#"{"userId":null,"userIntent":"study"}"#).unwrap();
        assert_eq!(req.user_id, "");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_intent_is_none() {
        let req: FindMatchesRequest =
            serde_json::from_str(r#"{"userId":"u1","userIntent":"   "}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.intent(), None);
    }

    #[test]
    fn test_snake_case_aliases() {
        let req: FindMatchesRequest =
            serde_json::from_str(r#"{"user_id":"u1","user_intent":"gym buddies"}"#).unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.intent(), Some("gym buddies"));
    }
}
