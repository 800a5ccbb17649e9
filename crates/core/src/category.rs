//! Closed sets for artwork categories and media kinds.
//!
//! Stored as plain text columns; these constants are the single source of
//! truth for what the admin forms may submit.

use crate::error::CoreError;

pub const CATEGORY_PAINTING: &str = "painting";
pub const CATEGORY_GRAPHICS: &str = "graphics";
pub const CATEGORY_COLLAGE: &str = "collage";
pub const CATEGORY_SCULPTURE: &str = "sculpture";
pub const CATEGORY_OTHER: &str = "other";

/// All valid artwork categories.
pub const ARTWORK_CATEGORIES: [&str; 5] = [
    CATEGORY_PAINTING,
    CATEGORY_GRAPHICS,
    CATEGORY_COLLAGE,
    CATEGORY_SCULPTURE,
    CATEGORY_OTHER,
];

pub const MEDIA_KIND_VIDEO: &str = "video";
pub const MEDIA_KIND_ARTICLE: &str = "article";

/// All valid media item kinds.
pub const MEDIA_KINDS: [&str; 2] = [MEDIA_KIND_VIDEO, MEDIA_KIND_ARTICLE];

/// Validate an artwork category against the closed set.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if ARTWORK_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "unknown artwork category: {category}"
        )))
    }
}

/// Validate a media kind against the closed set.
pub fn validate_media_kind(kind: &str) -> Result<(), CoreError> {
    if MEDIA_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("unknown media kind: {kind}")))
    }
}
