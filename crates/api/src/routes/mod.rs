pub mod admin;
pub mod artworks;
pub mod auth;
pub mod exhibitions;
pub mod health;
pub mod media;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/refresh                                refresh (public)
/// /auth/logout                                 logout (requires auth)
///
/// /artworks                                    localized list (?lang=)
/// /artworks/{id}                               localized detail (?lang=)
/// /exhibitions                                 localized list (?lang=)
/// /exhibitions/{id}                            localized detail + images (?lang=)
/// /media                                       localized list (?lang=)
///
/// /admin/artworks                              list, create (admin only)
/// /admin/artworks/{id}                         update, delete
/// /admin/artworks/reorder                      move one artwork (POST)
///
/// /admin/exhibitions                           list, create (admin only)
/// /admin/exhibitions/{id}                      get, update, delete
/// /admin/exhibitions/reorder                   move one exhibition (POST)
/// /admin/exhibitions/{id}/images               attach image (POST)
/// /admin/exhibitions/{id}/images/{image_id}    detach image (DELETE)
/// /admin/exhibitions/{id}/images/reorder       move one image (POST)
///
/// /admin/media                                 list, create (admin only)
/// /admin/media/{id}                            update, delete
/// /admin/media/reorder                         move one media item (POST)
///
/// /admin/uploads                               multipart image upload (POST)
/// /admin/link-preview                          article metadata (?url=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Public, localized content.
        .nest("/artworks", artworks::router())
        .nest("/exhibitions", exhibitions::router())
        .nest("/media", media::router())
        // Curator panel (admin role required on every handler).
        .nest("/admin/artworks", artworks::admin_router())
        .nest("/admin/exhibitions", exhibitions::admin_router())
        .nest("/admin/media", media::admin_router())
        // Uploads and link previews for the curator panel.
        .merge(admin::router())
}
