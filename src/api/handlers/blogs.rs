//! Blog-related API handlers

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use super::bad_request;
use super::error_response;
use super::ApiError;
use super::AppState;
use crate::api::types::ApiResponse;
use crate::models::Blog;
use crate::models::NewBlog;

/// Create a blog (POST /api/blogs)
pub async fn create_blog(
    State(state): State<AppState>,
    Json(blog): Json<NewBlog>,
) -> Result<(StatusCode, Json<ApiResponse<Blog>>), ApiError> {
    info!("POST /api/blogs ({})", blog.handle);

    if blog.name.trim().is_empty() || blog.handle.trim().is_empty() {
        return Err(bad_request("Blog name and handle are required", "invalidinput"));
    }

    let blog = state
        .service
        .create_blog(blog)
        .await
        .map_err(|e| error_response(&e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(blog))))
}

/// List blogs (GET /api/blogs)
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Blog>>>, ApiError> {
    info!("GET /api/blogs");

    let blogs = state
        .service
        .list_blogs()
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(ApiResponse::success(blogs)))
}

/// Get blog by id (GET /api/blogs/:id)
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Blog>>, ApiError> {
    info!("GET /api/blogs/{}", id);

    match state.service.find_blog(id).await {
        Ok(Some(blog)) => Ok(Json(ApiResponse::success(blog))),
        Ok(None) => Err(error_response(&crate::BlogModError::BlogNotFound(id))),
        Err(e) => Err(error_response(&e)),
    }
}
