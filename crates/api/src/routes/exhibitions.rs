//! Route definitions for exhibitions and their image galleries.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::exhibitions;
use crate::state::AppState;

/// Public routes mounted at `/exhibitions`.
///
/// ```text
/// GET /         -> list (?lang=)
/// GET /{id}     -> get with images (?lang=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exhibitions::list))
        .route("/{id}", get(exhibitions::get))
}

/// Admin routes mounted at `/admin/exhibitions`.
///
/// ```text
/// GET    /                            -> admin_list (full rows)
/// POST   /                            -> create
/// GET    /{id}                        -> admin_get with images
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// POST   /reorder                     -> reorder
/// POST   /{id}/images                 -> add_image
/// DELETE /{id}/images/{image_id}      -> delete_image
/// POST   /{id}/images/reorder         -> reorder_images (scoped)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(exhibitions::admin_list).post(exhibitions::create))
        .route(
            "/{id}",
            get(exhibitions::admin_get)
                .put(exhibitions::update)
                .delete(exhibitions::delete),
        )
        .route("/reorder", post(exhibitions::reorder))
        .route("/{id}/images", post(exhibitions::add_image))
        .route(
            "/{id}/images/{image_id}",
            delete(exhibitions::delete_image),
        )
        .route("/{id}/images/reorder", post(exhibitions::reorder_images))
}
