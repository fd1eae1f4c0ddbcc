use actix_web::{error, http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::services::{ProfileStore, StoreError};
use crate::core::Matcher;
use std::sync::Arc;
use thiserror::Error;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub matcher: Matcher,
    /// Upper bound applied to a client-supplied `limit`
    pub max_limit: usize,
}

/// Failures surfaced by the match endpoint
///
/// Every variant stops the request before any ranking happens.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("userId is required")]
    InvalidRequest,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    #[error("Failed to fetch users")]
    UpstreamFailure,
}

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidRequest | MatchError::Validation(_) => StatusCode::BAD_REQUEST,
            MatchError::NotFound => StatusCode::NOT_FOUND,
            MatchError::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match-users", web::post().to(match_users));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Profile store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match users endpoint
///
/// POST /api/v1/match-users
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "userIntent": "Looking for hackathon teammates",
///   "limit": 20
/// }
/// ```
pub async fn match_users(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, MatchError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match-users request: {}", errors);
        if errors.field_errors().contains_key("user_id") {
            return Err(MatchError::InvalidRequest);
        }
        return Err(MatchError::Validation(errors.to_string()));
    }

    let user_id = req.user_id.as_str();
    let intent = req.intent();

    // Any failure to resolve the requester is a 404, including ids the store rejects
    let requester = state.store.get_profile(user_id).await.map_err(|e| {
        match e {
            StoreError::NotFound(_) => tracing::info!("Requester profile not found: {}", user_id),
            other => tracing::error!("Failed to fetch profile for {}: {}", user_id, other),
        }
        MatchError::NotFound
    })?;

    let candidates = state
        .store
        .list_other_profiles(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch candidates for {}: {}", user_id, e);
            MatchError::UpstreamFailure
        })?;

    tracing::debug!("Loaded {} candidates for {}", candidates.len(), user_id);

    let result = state.matcher.rank(&requester, candidates, intent);

    let mut matches = result.matches;
    if let Some(limit) = req.limit {
        matches.truncate(limit.min(state.max_limit));
    }

    match intent {
        Some(text) => tracing::info!(
            "Found {} matches for user {} with intent: \"{}\" ({})",
            matches.len(),
            user_id,
            text,
            result.classification.category
        ),
        None => tracing::info!("Found {} matches for user {}", matches.len(), user_id),
    }

    Ok(HttpResponse::Ok().json(FindMatchesResponse { matches }))
}
