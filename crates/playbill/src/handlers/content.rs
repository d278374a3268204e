//! Content CRUD and genre-tagging handlers.
//!
//! Thin adapters between the HTTP surface and the catalog service: query
//! and body extraction, logging, and the status codes the service's error
//! taxonomy doesn't dictate (201 on create).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use playbill_core::catalog::Content;

use crate::{handlers::AppError, models::ContentInput, state::AppState};

/// Query parameters for the paginated list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

/// Query parameters for the filtered list endpoint.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
}

/// List contents, paginated and cached (GET /content).
pub async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Content>>, AppError> {
    tracing::info!(page = query.page, page_size = query.page_size, "listing contents");

    let contents = state.catalog.list(query.page, query.page_size).await?;
    Ok(Json(contents))
}

/// List contents matching title/genre filters, uncached (GET /content/filter).
pub async fn filter_contents(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<Content>>, AppError> {
    tracing::info!(title = ?query.title, genre = ?query.genre, "listing filtered contents");

    let contents = state
        .catalog
        .list_filtered(query.title.as_deref(), query.genre.as_deref())
        .await?;
    Ok(Json(contents))
}

/// Get a single content by ID, cached (GET /content/{id}).
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Content>, AppError> {
    tracing::info!(content_id = %id, "fetching content");

    let content = state.catalog.get(id).await?;
    Ok(Json(content))
}

/// Create a new content record (POST /content).
pub async fn create_content(
    State(state): State<AppState>,
    Json(payload): Json<ContentInput>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(title = %payload.title, "creating content");

    let created = state.catalog.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a content record wholesale (PATCH /content/{id}).
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContentInput>,
) -> Result<Json<Content>, AppError> {
    tracing::info!(content_id = %id, "updating content");

    let updated = state.catalog.update(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a content record (DELETE /content/{id}).
///
/// Responds with the deleted identifier.
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>, AppError> {
    tracing::info!(content_id = %id, "deleting content");

    let deleted = state.catalog.delete(id).await?;
    Ok(Json(deleted))
}

/// Append genres to a content record (POST /content/{id}/genre).
pub async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<Json<Content>, AppError> {
    tracing::info!(content_id = %id, count = genres.len(), "adding genres");

    let updated = state.catalog.add_genres(id, &genres).await?;
    Ok(Json(updated))
}

/// Remove genres from a content record (DELETE /content/{id}/genre).
pub async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<Json<Content>, AppError> {
    tracing::info!(content_id = %id, count = genres.len(), "removing genres");

    let updated = state.catalog.remove_genres(id, &genres).await?;
    Ok(Json(updated))
}
