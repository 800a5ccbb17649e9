//! Handlers for exhibitions and their image galleries.
//!
//! Images are a sortable sub-collection scoped to one exhibition; their
//! reorder endpoint operates within that scope only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::ordering::plan_move;
use atelier_core::types::DbId;
use atelier_db::models::exhibition::{
    CreateExhibition, Exhibition, ExhibitionView, UpdateExhibition,
};
use atelier_db::models::exhibition_image::{CreateExhibitionImage, ExhibitionImage};
use atelier_db::repositories::{
    apply_order_updates, ExhibitionImageRepo, ExhibitionRepo, OrderedCollection,
};

use super::{LangQuery, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public detail view: localized exhibition plus its ordered images.
#[derive(Debug, Serialize)]
pub struct ExhibitionDetail {
    #[serde(flatten)]
    pub exhibition: ExhibitionView,
    pub images: Vec<ExhibitionImage>,
}

/// Admin detail view: full row plus its ordered images.
#[derive(Debug, Serialize)]
pub struct AdminExhibitionDetail {
    #[serde(flatten)]
    pub exhibition: Exhibition,
    pub images: Vec<ExhibitionImage>,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/exhibitions?lang=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let exhibitions = ExhibitionRepo::list(&state.pool).await?;
    let views: Vec<ExhibitionView> = exhibitions
        .iter()
        .map(|e| e.localize(query.lang, today))
        .collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/exhibitions/{id}?lang=
///
/// Localized exhibition with its image gallery in presentation order.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<impl IntoResponse> {
    let exhibition = ExhibitionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "exhibition",
            id,
        })?;
    let images = ExhibitionImageRepo::list_for_exhibition(&state.pool, id).await?;

    let today = chrono::Utc::now().date_naive();
    Ok(Json(DataResponse {
        data: ExhibitionDetail {
            exhibition: exhibition.localize(query.lang, today),
            images,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/exhibitions
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let exhibitions = ExhibitionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: exhibitions }))
}

/// GET /api/v1/admin/exhibitions/{id}
pub async fn admin_get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let exhibition = ExhibitionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "exhibition",
            id,
        })?;
    let images = ExhibitionImageRepo::list_for_exhibition(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: AdminExhibitionDetail { exhibition, images },
    }))
}

/// POST /api/v1/admin/exhibitions
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateExhibition>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let exhibition = ExhibitionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        exhibition_id = exhibition.id,
        title = %exhibition.title,
        user_id = admin.user_id,
        "Exhibition created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: exhibition })))
}

/// PUT /api/v1/admin/exhibitions/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExhibition>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let exhibition = ExhibitionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "exhibition",
            id,
        })?;

    tracing::info!(
        exhibition_id = id,
        language = %input.language,
        user_id = admin.user_id,
        "Exhibition updated",
    );

    Ok(Json(DataResponse { data: exhibition }))
}

/// DELETE /api/v1/admin/exhibitions/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExhibitionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "exhibition",
            id,
        }));
    }

    tracing::info!(
        exhibition_id = id,
        user_id = admin.user_id,
        "Exhibition deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/exhibitions/reorder
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let exhibitions = ExhibitionRepo::list(&state.pool).await?;
    let updates = plan_move(&exhibitions, input.from_index, input.to_index)?;

    apply_order_updates(&state.pool, OrderedCollection::Exhibitions, &updates).await?;

    tracing::info!(
        from_index = input.from_index,
        to_index = input.to_index,
        writes = updates.len(),
        user_id = admin.user_id,
        "Exhibitions reordered",
    );

    let exhibitions = ExhibitionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: exhibitions }))
}

// ---------------------------------------------------------------------------
// Admin image endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/exhibitions/{id}/images
///
/// Attach an image, placed last within the exhibition's gallery.
pub async fn add_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(exhibition_id): Path<DbId>,
    Json(input): Json<CreateExhibitionImage>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    // The FK would catch this too; checking first gives a clean 404.
    ExhibitionRepo::find_by_id(&state.pool, exhibition_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "exhibition",
            id: exhibition_id,
        })?;

    let image = ExhibitionImageRepo::create(&state.pool, exhibition_id, &input).await?;

    tracing::info!(
        exhibition_id,
        image_id = image.id,
        user_id = admin.user_id,
        "Exhibition image attached",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// DELETE /api/v1/admin/exhibitions/{id}/images/{image_id}
pub async fn delete_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((exhibition_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ExhibitionImageRepo::delete(&state.pool, exhibition_id, image_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "exhibition image",
            id: image_id,
        }));
    }

    tracing::info!(
        exhibition_id,
        image_id,
        user_id = admin.user_id,
        "Exhibition image removed",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/exhibitions/{id}/images/reorder
///
/// Reorder within one exhibition's gallery only.
pub async fn reorder_images(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(exhibition_id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let images = ExhibitionImageRepo::list_for_exhibition(&state.pool, exhibition_id).await?;
    let updates = plan_move(&images, input.from_index, input.to_index)?;

    apply_order_updates(&state.pool, OrderedCollection::ExhibitionImages, &updates).await?;

    tracing::info!(
        exhibition_id,
        from_index = input.from_index,
        to_index = input.to_index,
        writes = updates.len(),
        user_id = admin.user_id,
        "Exhibition images reordered",
    );

    let images = ExhibitionImageRepo::list_for_exhibition(&state.pool, exhibition_id).await?;
    Ok(Json(DataResponse { data: images }))
}
