use async_trait::async_trait;
use crate::models::Profile;
use crate::services::store::{ProfileStore, StoreError};
use reqwest::{Client, Response};
use std::time::Duration;

/// Supabase REST (PostgREST) client for the profiles table
///
/// Handles:
/// - Fetching a single profile by id
/// - Listing every other profile as one snapshot
pub struct SupabaseClient {
    base_url: String,
    service_key: String,
    profiles_table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        service_key: String,
        profiles_table: String,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            service_key,
            profiles_table,
            client,
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.profiles_table
        )
    }

    /// GET the profiles table with a PostgREST filter on `id`
    async fn query_profiles(&self, id_filter: &str) -> Result<Response, StoreError> {
        let url = format!(
            "{}?id={}&select=*",
            self.table_url(),
            urlencoding::encode(id_filter)
        );

        tracing::debug!("Querying profiles: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl ProfileStore for SupabaseClient {
    async fn get_profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        tracing::debug!("Fetching profile for user: {}", user_id);

        let response = self.query_profiles(&format!("eq.{}", user_id)).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch profile for {}: {} - {}", user_id, status, body);
            return Err(StoreError::ApiError(format!(
                "Failed to fetch profile: {}",
                status
            )));
        }

        let mut profiles: Vec<Profile> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))?;

        if profiles.is_empty() {
            return Err(StoreError::NotFound(format!(
                "Profile not found for user {}",
                user_id
            )));
        }

        Ok(profiles.swap_remove(0))
    }

    async fn list_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, StoreError> {
        let response = self.query_profiles(&format!("neq.{}", exclude_id)).await?;

        if !response.status().is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to list profiles: {}",
                response.status()
            )));
        }

        let profiles: Vec<Profile> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse profiles: {}", e)))?;

        // PostgREST already filtered, but never hand the requester back as a candidate
        let profiles: Vec<Profile> = profiles
            .into_iter()
            .filter(|p| p.id != exclude_id)
            .collect();

        tracing::debug!("Listed {} candidate profiles", profiles.len());

        Ok(profiles)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let response = self
            .client
            .get(format!("{}?select=id&limit=1", self.table_url()))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
