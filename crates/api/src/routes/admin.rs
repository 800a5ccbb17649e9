//! Route definitions for curator panel utilities (uploads, link previews).

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{link_preview, uploads};
use crate::state::AppState;

/// Routes mounted at the API root (paths already carry the `/admin` prefix).
///
/// ```text
/// POST /admin/uploads        -> upload (multipart)
/// GET  /admin/link-preview   -> link_preview (?url=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/uploads",
            post(uploads::upload).layer(DefaultBodyLimit::max(uploads::MAX_UPLOAD_BYTES)),
        )
        .route("/admin/link-preview", get(link_preview::link_preview))
}
