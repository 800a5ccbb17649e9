//! HTTP handlers.
//!
//! Public handlers take a `?lang=` query parameter and return single-language
//! views; admin handlers return full rows (all language columns) so the
//! curator panel can populate its translation forms.

pub mod artworks;
pub mod auth;
pub mod exhibitions;
pub mod link_preview;
pub mod media;
pub mod uploads;

use serde::Deserialize;

use atelier_core::i18n::Language;

/// `?lang=` query parameter for public endpoints.
///
/// Unknown or missing codes fall back to the default language.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Language,
}

/// Request body for the reorder endpoints.
///
/// Zero-based positions within the collection as currently presented
/// (ascending `display_order`).
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from_index: usize,
    pub to_index: usize,
}
