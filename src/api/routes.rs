//! API route definitions

use axum::routing::get;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Entry endpoints
        .route(
            "/entries",
            get(handlers::list_entries)
                .post(handlers::create_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entries_by_keywords),
        )
        .route(
            "/entries/:id",
            get(handlers::get_entry).delete(handlers::delete_entry),
        )
        // Blog endpoints
        .route(
            "/blogs",
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route("/blogs/:id", get(handlers::get_blog))
        .with_state(state)
}

/// Full application router with the API nested under `/api`
pub fn app(state: AppState) -> Router {
    Router::new().nest("/api", api_routes(state))
}
