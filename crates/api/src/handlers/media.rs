//! Handlers for press and video media items.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::category::{validate_media_kind, MEDIA_KIND_VIDEO};
use atelier_core::error::CoreError;
use atelier_core::ordering::plan_move;
use atelier_core::types::DbId;
use atelier_core::video::validate_youtube_url;
use atelier_db::models::media_item::{CreateMediaItem, MediaItemView, UpdateMediaItem};
use atelier_db::repositories::{apply_order_updates, MediaItemRepo, OrderedCollection};

use super::{LangQuery, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/media?lang=
///
/// Localized media items in presentation order; video items carry derived
/// embed and thumbnail URLs.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<impl IntoResponse> {
    let items = MediaItemRepo::list(&state.pool).await?;
    let views: Vec<MediaItemView> = items.iter().map(|m| m.localize(query.lang)).collect();

    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/media
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = MediaItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/admin/media
///
/// Create a media item. Video items must carry a recognizable YouTube URL.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMediaItem>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    validate_media_kind(&input.kind)?;
    if input.kind == MEDIA_KIND_VIDEO {
        validate_youtube_url(&input.url)?;
    }

    let item = MediaItemRepo::create(&state.pool, &input).await?;

    tracing::info!(
        media_id = item.id,
        kind = %item.kind,
        user_id = admin.user_id,
        "Media item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/media/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(kind) = &input.kind {
        validate_media_kind(kind)?;
    }

    // When either side of (kind, url) changes, re-check the video rule
    // against the resulting row.
    let existing = MediaItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "media item",
            id,
        })?;
    let kind = input.kind.as_deref().unwrap_or(&existing.kind);
    let url = input.url.as_deref().unwrap_or(&existing.url);
    if kind == MEDIA_KIND_VIDEO {
        validate_youtube_url(url)?;
    }

    let item = MediaItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "media item",
            id,
        })?;

    tracing::info!(
        media_id = id,
        language = %input.language,
        user_id = admin.user_id,
        "Media item updated",
    );

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/media/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MediaItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "media item",
            id,
        }));
    }

    tracing::info!(media_id = id, user_id = admin.user_id, "Media item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/media/reorder
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let items = MediaItemRepo::list(&state.pool).await?;
    let updates = plan_move(&items, input.from_index, input.to_index)?;

    apply_order_updates(&state.pool, OrderedCollection::MediaItems, &updates).await?;

    tracing::info!(
        from_index = input.from_index,
        to_index = input.to_index,
        writes = updates.len(),
        user_id = admin.user_id,
        "Media items reordered",
    );

    let items = MediaItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}
