//! Handler for the admin link-preview endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/link-preview`.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub url: String,
}

/// GET /api/v1/admin/link-preview?url=
///
/// Fetch title/description/image metadata for an article URL so the admin
/// panel can render a preview card before saving a media item.
pub async fn link_preview(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> AppResult<impl IntoResponse> {
    let metadata = state.preview.fetch(&query.url).await?;
    Ok(Json(DataResponse { data: metadata }))
}
