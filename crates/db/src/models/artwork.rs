//! Artwork entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::i18n::{self, Language};
use atelier_core::ordering::Ordered;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `artworks` table.
///
/// `title`, `description`, and `theme` are localizable: the bare column is
/// the default-language value, `_am`/`_ru` columns hold translations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub title_am: Option<String>,
    pub title_ru: Option<String>,
    pub description: String,
    pub description_am: Option<String>,
    pub description_ru: Option<String>,
    pub theme: String,
    pub theme_am: Option<String>,
    pub theme_ru: Option<String>,
    pub category: String,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub is_sold: bool,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Artwork {
    pub fn title_in(&self, language: Language) -> &str {
        i18n::resolve(
            &self.title,
            self.title_am.as_deref(),
            self.title_ru.as_deref(),
            language,
        )
    }

    pub fn description_in(&self, language: Language) -> &str {
        i18n::resolve(
            &self.description,
            self.description_am.as_deref(),
            self.description_ru.as_deref(),
            language,
        )
    }

    pub fn theme_in(&self, language: Language) -> &str {
        i18n::resolve(
            &self.theme,
            self.theme_am.as_deref(),
            self.theme_ru.as_deref(),
            language,
        )
    }

    /// Build the public, single-language view of this artwork.
    pub fn localize(&self, language: Language) -> ArtworkView {
        ArtworkView {
            id: self.id,
            title: self.title_in(language).to_string(),
            description: self.description_in(language).to_string(),
            theme: self.theme_in(language).to_string(),
            category: self.category.clone(),
            year: self.year,
            price_cents: self.price_cents,
            currency: self.currency.clone(),
            is_sold: self.is_sold,
            image_url: self.image_url.clone(),
            display_order: self.display_order,
        }
    }
}

impl Ordered for Artwork {
    fn id(&self) -> DbId {
        self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// Public single-language projection of an artwork.
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub category: String,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub is_sold: bool,
    pub image_url: Option<String>,
    pub display_order: i32,
}

/// DTO for creating a new artwork.
///
/// New records are always created in the default language; translations are
/// added through updates. The new row is placed last in the collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtwork {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub category: String,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub is_sold: Option<bool>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing artwork.
///
/// `language` selects which column the localizable fields are written to;
/// an edit in a non-default language never touches the base columns.
/// Non-localizable fields apply as-is. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtwork {
    #[serde(default)]
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub is_sold: Option<bool>,
    pub image_url: Option<String>,
}

impl UpdateArtwork {
    /// Reject edits that would blank the title's base value.
    ///
    /// Only the base (default-language) column is load-bearing: it is the
    /// fallback for every language, so it must stay non-empty. A blank
    /// variant is fine -- the resolver treats it as absent.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.language.is_default() {
            if let Some(title) = &self.title {
                if title.trim().is_empty() {
                    return Err(CoreError::Validation("title must not be empty".into()));
                }
            }
        }
        Ok(())
    }
}
