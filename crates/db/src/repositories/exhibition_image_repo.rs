//! Repository for the `exhibition_images` table.
//!
//! Ordering scope is per exhibition: `display_order` restarts at 1 for each
//! `exhibition_id`.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::exhibition_image::{CreateExhibitionImage, ExhibitionImage};

const COLUMNS: &str = "id, exhibition_id, image_url, display_order, created_at";

/// Provides CRUD operations for exhibition images.
pub struct ExhibitionImageRepo;

impl ExhibitionImageRepo {
    /// Attach an image to an exhibition, placing it last within that scope.
    pub async fn create(
        pool: &PgPool,
        exhibition_id: DbId,
        input: &CreateExhibitionImage,
    ) -> Result<ExhibitionImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibition_images (exhibition_id, image_url, display_order) \
             VALUES ($1, $2, \
                     (SELECT COALESCE(MAX(display_order), 0) + 1 \
                        FROM exhibition_images WHERE exhibition_id = $1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExhibitionImage>(&query)
            .bind(exhibition_id)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// List one exhibition's images in presentation order.
    pub async fn list_for_exhibition(
        pool: &PgPool,
        exhibition_id: DbId,
    ) -> Result<Vec<ExhibitionImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exhibition_images \
             WHERE exhibition_id = $1 ORDER BY display_order, id"
        );
        sqlx::query_as::<_, ExhibitionImage>(&query)
            .bind(exhibition_id)
            .fetch_all(pool)
            .await
    }

    /// Remove an image from an exhibition. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        exhibition_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM exhibition_images WHERE id = $1 AND exhibition_id = $2")
                .bind(id)
                .bind(exhibition_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
