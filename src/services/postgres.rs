use async_trait::async_trait;
use crate::models::{Profile, TagSet};
use crate::services::store::{ProfileStore, StoreError};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

const PROFILE_COLUMNS: &str =
    "id::text AS id, name, email, major, year, tags, bio, looking_for";

/// PostgreSQL profile store
///
/// Reads the `profiles` table directly, for deployments where the service sits
/// next to the database instead of going through the REST API. Columns may be
/// NULL; they map to empty strings and empty sets.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }
}

/// Map a `profiles` row onto a Profile
fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    let text = |column: &str| -> Result<String, sqlx::Error> {
        Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
    };
    let set = |column: &str| -> Result<TagSet, sqlx::Error> {
        Ok(TagSet::from(row.try_get::<Option<Vec<String>>, _>(column)?))
    };

    Ok(Profile {
        id: row.try_get("id")?,
        name: text("name")?,
        email: text("email")?,
        major: text("major")?,
        year: text("year")?,
        tags: set("tags")?,
        bio: text("bio")?,
        looking_for: set("looking_for")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresClient {
    async fn get_profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE id::text = $1",
            PROFILE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        Ok(profile_from_row(&row)?)
    }

    /// Candidates in creation order, read in one statement
    async fn list_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, StoreError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE id::text <> $1 ORDER BY created_at",
            PROFILE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(exclude_id)
            .fetch_all(&self.pool)
            .await?;

        let profiles = rows
            .iter()
            .map(profile_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} candidate profiles excluding {}", profiles.len(), exclude_id);

        Ok(profiles)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
