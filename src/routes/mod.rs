// Route exports
pub mod matches;

use actix_web::{error, web, HttpResponse};
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    )
    // Path used by the original serverless function, kept for existing clients
    .service(
        web::scope("/functions/v1")
            .route("/match-users", web::post().to(matches::match_users)),
    );
}

/// JSON extractor config that answers malformed bodies with a 400 `{ "error": ... }`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: format!("Invalid JSON: {}", err),
    });
    error::InternalError::from_response(err, response).into()
}
