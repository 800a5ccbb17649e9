//! Repository for the `exhibitions` table.

use sqlx::PgPool;

use atelier_core::i18n::LocalizedPatch;
use atelier_core::types::DbId;

use crate::models::exhibition::{CreateExhibition, Exhibition, UpdateExhibition};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, title_am, title_ru, \
                       description, description_am, description_ru, \
                       location, location_am, location_ru, \
                       starts_on, ends_on, cover_image_url, \
                       display_order, created_at, updated_at";

/// Provides CRUD operations for exhibitions.
pub struct ExhibitionRepo;

impl ExhibitionRepo {
    /// Insert a new exhibition, placing it last in the collection.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExhibition,
    ) -> Result<Exhibition, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibitions \
                (title, description, location, starts_on, ends_on, cover_image_url, \
                 display_order) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, $5, $6, \
                     (SELECT COALESCE(MAX(display_order), 0) + 1 FROM exhibitions)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an exhibition by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions WHERE id = $1");
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all exhibitions in presentation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions ORDER BY display_order, id");
        sqlx::query_as::<_, Exhibition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an exhibition. Only non-`None` fields are applied; localizable
    /// fields are routed to the column for `input.language`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExhibition,
    ) -> Result<Option<Exhibition>, sqlx::Error> {
        let title = LocalizedPatch::for_language(input.language, input.title.clone());
        let description = LocalizedPatch::for_language(input.language, input.description.clone());
        let location = LocalizedPatch::for_language(input.language, input.location.clone());

        let query = format!(
            "UPDATE exhibitions SET \
                title = COALESCE($2, title), \
                title_am = COALESCE($3, title_am), \
                title_ru = COALESCE($4, title_ru), \
                description = COALESCE($5, description), \
                description_am = COALESCE($6, description_am), \
                description_ru = COALESCE($7, description_ru), \
                location = COALESCE($8, location), \
                location_am = COALESCE($9, location_am), \
                location_ru = COALESCE($10, location_ru), \
                starts_on = COALESCE($11, starts_on), \
                ends_on = COALESCE($12, ends_on), \
                cover_image_url = COALESCE($13, cover_image_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .bind(&title.base)
            .bind(&title.am)
            .bind(&title.ru)
            .bind(&description.base)
            .bind(&description.am)
            .bind(&description.ru)
            .bind(&location.base)
            .bind(&location.am)
            .bind(&location.ru)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exhibition and (via FK cascade) its images.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exhibitions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
