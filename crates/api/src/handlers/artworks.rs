//! Handlers for the artwork collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::category::validate_category;
use atelier_core::error::CoreError;
use atelier_core::ordering::plan_move;
use atelier_core::types::DbId;
use atelier_db::models::artwork::{ArtworkView, CreateArtwork, UpdateArtwork};
use atelier_db::repositories::{apply_order_updates, ArtworkRepo, OrderedCollection};

use super::{LangQuery, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/artworks?lang=
///
/// List artworks in presentation order, localized to the requested language.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<impl IntoResponse> {
    let artworks = ArtworkRepo::list(&state.pool).await?;
    let views: Vec<ArtworkView> = artworks.iter().map(|a| a.localize(query.lang)).collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/artworks/{id}?lang=
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<impl IntoResponse> {
    let artwork = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "artwork",
            id,
        })?;

    Ok(Json(DataResponse {
        data: artwork.localize(query.lang),
    }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/artworks
///
/// Full rows, all language columns, for the curator panel.
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let artworks = ArtworkRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: artworks }))
}

/// POST /api/v1/admin/artworks
///
/// Create an artwork in the default language, placed last in the collection.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateArtwork>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    validate_category(&input.category)?;

    let artwork = ArtworkRepo::create(&state.pool, &input).await?;

    tracing::info!(
        artwork_id = artwork.id,
        title = %artwork.title,
        user_id = admin.user_id,
        "Artwork created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: artwork })))
}

/// PUT /api/v1/admin/artworks/{id}
///
/// Update an artwork. The body's `language` field routes localizable
/// attributes to that language's columns.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtwork>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(category) = &input.category {
        validate_category(category)?;
    }

    let artwork = ArtworkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "artwork",
            id,
        })?;

    tracing::info!(
        artwork_id = id,
        language = %input.language,
        user_id = admin.user_id,
        "Artwork updated",
    );

    Ok(Json(DataResponse { data: artwork }))
}

/// DELETE /api/v1/admin/artworks/{id}
///
/// Remove an artwork. The remaining sequence keeps its gap.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ArtworkRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "artwork",
            id,
        }));
    }

    tracing::info!(artwork_id = id, user_id = admin.user_id, "Artwork deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/artworks/reorder
///
/// Persist a drag-and-drop move. Returns the re-fetched collection so the
/// panel can reconcile with the persisted order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let artworks = ArtworkRepo::list(&state.pool).await?;
    let updates = plan_move(&artworks, input.from_index, input.to_index)?;

    apply_order_updates(&state.pool, OrderedCollection::Artworks, &updates).await?;

    tracing::info!(
        from_index = input.from_index,
        to_index = input.to_index,
        writes = updates.len(),
        user_id = admin.user_id,
        "Artworks reordered",
    );

    let artworks = ArtworkRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: artworks }))
}
