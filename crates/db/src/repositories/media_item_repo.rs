//! Repository for the `media_items` table.

use sqlx::PgPool;

use atelier_core::i18n::LocalizedPatch;
use atelier_core::types::DbId;

use crate::models::media_item::{CreateMediaItem, MediaItem, UpdateMediaItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, media_name, media_name_am, media_name_ru, \
                       description, description_am, description_ru, \
                       kind, url, display_order, created_at, updated_at";

/// Provides CRUD operations for media items.
pub struct MediaItemRepo;

impl MediaItemRepo {
    /// Insert a new media item, placing it last in the collection.
    pub async fn create(pool: &PgPool, input: &CreateMediaItem) -> Result<MediaItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_items (media_name, description, kind, url, display_order) \
             VALUES ($1, COALESCE($2, ''), $3, $4, \
                     (SELECT COALESCE(MAX(display_order), 0) + 1 FROM media_items)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(&input.media_name)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a media item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_items WHERE id = $1");
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all media items in presentation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_items ORDER BY display_order, id");
        sqlx::query_as::<_, MediaItem>(&query).fetch_all(pool).await
    }

    /// Update a media item. Localizable fields are routed to the column for
    /// `input.language`; `kind` and `url` apply as-is.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaItem,
    ) -> Result<Option<MediaItem>, sqlx::Error> {
        let media_name = LocalizedPatch::for_language(input.language, input.media_name.clone());
        let description = LocalizedPatch::for_language(input.language, input.description.clone());

        let query = format!(
            "UPDATE media_items SET \
                media_name = COALESCE($2, media_name), \
                media_name_am = COALESCE($3, media_name_am), \
                media_name_ru = COALESCE($4, media_name_ru), \
                description = COALESCE($5, description), \
                description_am = COALESCE($6, description_am), \
                description_ru = COALESCE($7, description_ru), \
                kind = COALESCE($8, kind), \
                url = COALESCE($9, url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .bind(&media_name.base)
            .bind(&media_name.am)
            .bind(&media_name.ru)
            .bind(&description.base)
            .bind(&description.am)
            .bind(&description.ru)
            .bind(&input.kind)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
