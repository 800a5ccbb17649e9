//! Exhibition image model and DTOs.
//!
//! Images form a sortable sub-collection scoped to one exhibition:
//! `display_order` is unique per `exhibition_id`, not globally.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use atelier_core::ordering::Ordered;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `exhibition_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExhibitionImage {
    pub id: DbId,
    pub exhibition_id: DbId,
    pub image_url: String,
    pub display_order: i32,
    pub created_at: Timestamp,
}

impl Ordered for ExhibitionImage {
    fn id(&self) -> DbId {
        self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// DTO for attaching an image to an exhibition (placed last in its scope).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExhibitionImage {
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
}
