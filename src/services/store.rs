use async_trait::async_trait;
use crate::models::Profile;
use thiserror::Error;

/// Errors that can occur when reading profiles from a backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only access to student profiles
///
/// The matching service never writes through this trait. Implementations must
/// return the candidate list from a single read so one ranking pass works on a
/// consistent snapshot.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch one profile, `StoreError::NotFound` if it does not exist
    async fn get_profile(&self, user_id: &str) -> Result<Profile, StoreError>;

    /// Fetch every profile except `exclude_id`
    async fn list_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, StoreError>;

    /// Cheap connectivity probe
    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// In-memory store, used by tests and local demos
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Vec<Profile>,
}

impl MemoryProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        self.profiles
            .iter()
            .find(|p| p.id == user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))
    }

    async fn list_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.id != exclude_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_memory_store_lookup() {
        let store = MemoryProfileStore::new(vec![profile("a"), profile("b")]);

        assert_eq!(store.get_profile("b").await.unwrap().id, "b");
        assert!(matches!(store.get_profile("zzz").await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_memory_store_excludes_requester() {
        let store = MemoryProfileStore::new(vec![profile("a"), profile("b"), profile("c")]);

        let others = store.list_other_profiles("b").await.unwrap();
        let ids: Vec<&str> = others.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_memory_store_is_healthy() {
        let store = MemoryProfileStore::default();
        assert!(tokio_test::block_on(store.health_check()).unwrap());
    }
}
