//! Route definitions for press and video media items.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Public routes mounted at `/media`.
///
/// ```text
/// GET / -> list (?lang=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(media::list))
}

/// Admin routes mounted at `/admin/media`.
///
/// ```text
/// GET    /          -> admin_list (full rows)
/// POST   /          -> create
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// POST   /reorder   -> reorder
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::admin_list).post(media::create))
        .route("/{id}", put(media::update).delete(media::delete))
        .route("/reorder", post(media::reorder))
}
