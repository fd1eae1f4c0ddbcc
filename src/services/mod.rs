// Service exports
pub mod cache;
pub mod postgres;
pub mod store;
pub mod supabase;

pub use cache::{CacheManager, CacheKey, CacheError, CachedProfileStore};
pub use postgres::PostgresClient;
pub use store::{ProfileStore, MemoryProfileStore, StoreError};
pub use supabase::SupabaseClient;

use crate::config::{Settings, StoreBackend};
use std::sync::Arc;

/// Build the configured profile store
///
/// The requester cache wraps the store only when `cache.enabled` is set; cached
/// requesters may be served stale for up to the TTL.
pub async fn build_profile_store(settings: &Settings) -> Result<Arc<dyn ProfileStore>, StoreError> {
    let store: Arc<dyn ProfileStore> = match settings.store.backend {
        StoreBackend::Supabase => {
            let client = SupabaseClient::new(
                settings.supabase.url.clone(),
                settings.supabase.service_role_key.clone(),
                settings.supabase.profiles_table.clone(),
                settings.supabase.timeout_secs,
            )?;
            tracing::info!("Supabase profile store initialized ({})", settings.supabase.url);
            Arc::new(client)
        }
        StoreBackend::Postgres => {
            let db = &settings.database;
            let client = PostgresClient::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await?;
            tracing::info!(
                "PostgreSQL profile store initialized (max: {} connections)",
                db.max_connections.unwrap_or(10)
            );
            Arc::new(client)
        }
    };

    if !settings.cache.enabled {
        tracing::info!("Profile cache disabled");
        return Ok(store);
    }

    let ttl = settings.cache.ttl_secs.unwrap_or(60);
    let l1_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = match &settings.cache.redis_url {
        Some(url) => match CacheManager::new(url, l1_size, ttl).await {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!("Failed to connect to Redis ({}), using in-process cache only", e);
                CacheManager::in_memory(l1_size, ttl)
            }
        },
        None => CacheManager::in_memory(l1_size, ttl),
    };

    tracing::warn!(
        "Profile cache enabled (L1: {} entries, TTL: {}s, Redis: {}); requester profiles may be up to {}s stale",
        l1_size,
        ttl,
        cache.has_redis(),
        ttl
    );

    Ok(Arc::new(CachedProfileStore::new(store, Arc::new(cache))))
}
