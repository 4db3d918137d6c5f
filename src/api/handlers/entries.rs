//! Entry-related API handlers

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::info;

use super::bad_request;
use super::error_response;
use super::ApiError;
use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::BulkDeleteResponse;
use crate::api::types::KeywordsQuery;
use crate::api::types::PageQuery;
use crate::api::types::ScopedDeleteResponse;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::models::Page;
use crate::models::PageRequest;

/// Create an entry (POST /api/entries)
pub async fn create_entry(
    State(state): State<AppState>,
    Json(draft): Json<EntryDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Entry>>), ApiError> {
    info!("POST /api/entries (blog {})", draft.blog_id);

    if draft.id.is_some() {
        return Err(bad_request("A new entry cannot already have an ID", "idexists"));
    }

    let entry = state
        .service
        .save(draft)
        .await
        .map_err(|e| error_response(&e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

/// Update an entry (PUT /api/entries)
pub async fn update_entry(
    State(state): State<AppState>,
    Json(draft): Json<EntryDraft>,
) -> Result<Json<ApiResponse<Entry>>, ApiError> {
    info!("PUT /api/entries/{:?}", draft.id);

    if draft.id.is_none() {
        return Err(bad_request("Invalid id", "idnull"));
    }

    let entry = state
        .service
        .save(draft)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(ApiResponse::success(entry)))
}

/// List entries page by page (GET /api/entries)
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<ApiResponse<Page<Entry>>>, ApiError> {
    let size = params
        .size
        .unwrap_or(state.pagination.default_page_size)
        .clamp(1, state.pagination.max_page_size);
    let request = PageRequest::new(params.page.unwrap_or(0), size);
    info!("GET /api/entries?page={}&size={}", request.page, request.size);

    let page = state
        .service
        .find_all(request)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(ApiResponse::success(page)))
}

/// Get entry by id (GET /api/entries/:id)
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Entry>>, ApiError> {
    info!("GET /api/entries/{}", id);

    match state.service.find_one(id).await {
        Ok(Some(entry)) => Ok(Json(ApiResponse::success(entry))),
        Ok(None) => Err(error_response(&crate::BlogModError::EntryNotFound(id))),
        Err(e) => Err(error_response(&e)),
    }
}

/// Delete entry by id (DELETE /api/entries/:id).
///
/// With `?keywords=` the entry is deleted only if it matches them.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<KeywordsQuery>,
) -> Result<Response, ApiError> {
    if let Some(keywords) = params.keywords {
        info!("DELETE /api/entries/{}?keywords={}", id, keywords);
        let deleted = state
            .service
            .delete_by_keywords_for_entry(id, &keywords)
            .await
            .map_err(|e| error_response(&e))?;
        return Ok(Json(ApiResponse::success(ScopedDeleteResponse { deleted })).into_response());
    }

    info!("DELETE /api/entries/{}", id);
    state
        .service
        .delete(id)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete every entry matching keywords (DELETE /api/entries?keywords=)
pub async fn delete_entries_by_keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordsQuery>,
) -> Result<Json<ApiResponse<BulkDeleteResponse>>, ApiError> {
    let keywords = match params.keywords {
        Some(k) if !k.trim().is_empty() => k,
        _ => return Err(bad_request("Keywords are required", "keywordsrequired")),
    };
    info!("DELETE /api/entries?keywords={}", keywords);

    let deleted = state
        .service
        .delete_by_keywords(&keywords)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(ApiResponse::success(BulkDeleteResponse { deleted })))
}
