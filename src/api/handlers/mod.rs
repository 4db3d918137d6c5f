//! API request handlers

use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::config::PaginationConfig;
use crate::service::EntryService;
use crate::BlogModError;

pub mod blogs;
pub mod entries;

pub use blogs::*;
pub use entries::*;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: EntryService,
    pub pagination: PaginationConfig,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Map a service error to a status code and response body
pub fn error_response(err: &BlogModError) -> ApiError {
    match err {
        BlogModError::Rejected(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error_with_key(
                rejection.to_string(),
                rejection.error_key(),
            )),
        ),
        BlogModError::EntryNotFound(_) | BlogModError::BlogNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error_with_key(err.to_string(), "notfound")),
        ),
        BlogModError::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error_with_key(message.clone(), "invalidinput")),
        ),
        _ => {
            error!("Request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            )
        }
    }
}

/// Build a 400 response with a stable key
pub fn bad_request(message: &str, key: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error_with_key(message, key)),
    )
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
