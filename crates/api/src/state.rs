use std::sync::Arc;

use crate::config::ServerConfig;
use crate::preview::LinkPreviewClient;
use crate::storage::ObjectStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded images.
    pub storage: Arc<dyn ObjectStorage>,
    /// Link-preview metadata client.
    pub preview: Arc<LinkPreviewClient>,
}
