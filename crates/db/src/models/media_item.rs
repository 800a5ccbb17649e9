//! Media item (press / video) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::i18n::{self, Language};
use atelier_core::ordering::Ordered;
use atelier_core::types::{DbId, Timestamp};
use atelier_core::video;

/// A row from the `media_items` table.
///
/// `media_name` and `description` are localizable. `kind` is `"video"` or
/// `"article"`; video items carry a YouTube URL validated on write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaItem {
    pub id: DbId,
    pub media_name: String,
    pub media_name_am: Option<String>,
    pub media_name_ru: Option<String>,
    pub description: String,
    pub description_am: Option<String>,
    pub description_ru: Option<String>,
    pub kind: String,
    pub url: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MediaItem {
    pub fn media_name_in(&self, language: Language) -> &str {
        i18n::resolve(
            &self.media_name,
            self.media_name_am.as_deref(),
            self.media_name_ru.as_deref(),
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

    /// Build the public, single-language view of this media item.
    ///
    /// For video items the YouTube id and derived embed/thumbnail URLs are
    /// included; articles carry only the original URL.
    pub fn localize(&self, language: Language) -> MediaItemView {
        let video_id = video::youtube_video_id(&self.url).map(str::to_string);
        MediaItemView {
            id: self.id,
            media_name: self.media_name_in(language).to_string(),
            description: self.description_in(language).to_string(),
            kind: self.kind.clone(),
            url: self.url.clone(),
            embed_url: video_id.as_deref().map(video::embed_url),
            thumbnail_url: video_id.as_deref().map(video::thumbnail_url),
            video_id,
            display_order: self.display_order,
        }
    }
}

impl Ordered for MediaItem {
    fn id(&self) -> DbId {
        self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// Public single-language projection of a media item.
#[derive(Debug, Clone, Serialize)]
pub struct MediaItemView {
    pub id: DbId,
    pub media_name: String,
    pub description: String,
    pub kind: String,
    pub url: String,
    pub video_id: Option<String>,
    pub embed_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
}

/// DTO for creating a new media item (default language only; placed last).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMediaItem {
    #[validate(length(min = 1, message = "media_name must not be empty"))]
    pub media_name: String,
    pub description: Option<String>,
    pub kind: String,
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
}

/// DTO for updating an existing media item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMediaItem {
    #[serde(default)]
    pub language: Language,
    pub media_name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub url: Option<String>,
}

impl UpdateMediaItem {
    /// Reject edits that would blank a required attribute: the base
    /// `media_name` (every language's fallback) or the `url`. Blank
    /// variants are fine.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.language.is_default() {
            if let Some(name) = &self.media_name {
                if name.trim().is_empty() {
                    return Err(CoreError::Validation("media_name must not be empty".into()));
                }
            }
        }
        if let Some(url) = &self.url {
            if url.trim().is_empty() {
                return Err(CoreError::Validation("url must not be empty".into()));
            }
        }
        Ok(())
    }
}
