//! Repository for the `artworks` table.

use sqlx::PgPool;

use atelier_core::i18n::LocalizedPatch;
use atelier_core::types::DbId;

use crate::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, title_am, title_ru, \
                       description, description_am, description_ru, \
                       theme, theme_am, theme_ru, \
                       category, year, price_cents, currency, is_sold, image_url, \
                       display_order, created_at, updated_at";

/// Provides CRUD operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, placing it last in the collection.
    ///
    /// Base (default-language) columns only; translations arrive via
    /// [`ArtworkRepo::update`].
    pub async fn create(pool: &PgPool, input: &CreateArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks \
                (title, description, theme, category, year, price_cents, currency, \
                 is_sold, image_url, display_order) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, $5, $6, $7, \
                     COALESCE($8, false), $9, \
                     (SELECT COALESCE(MAX(display_order), 0) + 1 FROM artworks)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.theme)
            .bind(&input.category)
            .bind(input.year)
            .bind(input.price_cents)
            .bind(&input.currency)
            .bind(input.is_sold)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artworks in presentation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks ORDER BY display_order, id");
        sqlx::query_as::<_, Artwork>(&query).fetch_all(pool).await
    }

    /// Update an artwork. Only non-`None` fields are applied.
    ///
    /// Localizable fields are routed to the column for `input.language`:
    /// an edit in Armenian or Russian writes only that language's variant
    /// column and never touches the base column, and vice versa.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtwork,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let title = LocalizedPatch::for_language(input.language, input.title.clone());
        let description = LocalizedPatch::for_language(input.language, input.description.clone());
        let theme = LocalizedPatch::for_language(input.language, input.theme.clone());

        let query = format!(
            "UPDATE artworks SET \
                title = COALESCE($2, title), \
                title_am = COALESCE($3, title_am), \
                title_ru = COALESCE($4, title_ru), \
                description = COALESCE($5, description), \
                description_am = COALESCE($6, description_am), \
                description_ru = COALESCE($7, description_ru), \
                theme = COALESCE($8, theme), \
                theme_am = COALESCE($9, theme_am), \
                theme_ru = COALESCE($10, theme_ru), \
                category = COALESCE($11, category), \
                year = COALESCE($12, year), \
                price_cents = COALESCE($13, price_cents), \
                currency = COALESCE($14, currency), \
                is_sold = COALESCE($15, is_sold), \
                image_url = COALESCE($16, image_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&title.base)
            .bind(&title.am)
            .bind(&title.ru)
            .bind(&description.base)
            .bind(&description.am)
            .bind(&description.ru)
            .bind(&theme.base)
            .bind(&theme.am)
            .bind(&theme.ru)
            .bind(&input.category)
            .bind(input.year)
            .bind(input.price_cents)
            .bind(&input.currency)
            .bind(input.is_sold)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artwork. Returns `true` if a row was removed.
    ///
    /// The remaining sequence keeps its gap; the next reorder renumbers it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
