//! HTTP API for the atelier portfolio backend.
//!
//! Public routes serve single-language views of the content; admin routes
//! (JWT bearer, admin role) provide CRUD, drag-and-drop reordering, image
//! uploads, and link previews for the curator panel.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod preview;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
