//! Route definitions for the artwork catalogue.
//!
//! Two routers are provided:
//! - `router()` for the public localized views mounted at `/artworks`
//! - `admin_router()` for curator CRUD and reordering at `/admin/artworks`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::artworks;
use crate::state::AppState;

/// Public routes mounted at `/artworks`.
///
/// ```text
/// GET /         -> list (?lang=)
/// GET /{id}     -> get (?lang=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artworks::list))
        .route("/{id}", get(artworks::get))
}

/// Admin routes mounted at `/admin/artworks`.
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
        .route("/", get(artworks::admin_list).post(artworks::create))
        .route("/{id}", put(artworks::update).delete(artworks::delete))
        .route("/reorder", post(artworks::reorder))
}
