//! Exhibition entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::i18n::{self, Language};
use atelier_core::ordering::Ordered;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `exhibitions` table.
///
/// `title`, `description`, and `location` are localizable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exhibition {
    pub id: DbId,
    pub title: String,
    pub title_am: Option<String>,
    pub title_ru: Option<String>,
    pub description: String,
    pub description_am: Option<String>,
    pub description_ru: Option<String>,
    pub location: String,
    pub location_am: Option<String>,
    pub location_ru: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub cover_image_url: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Exhibition {
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

    pub fn location_in(&self, language: Language) -> &str {
        i18n::resolve(
            &self.location,
            self.location_am.as_deref(),
            self.location_ru.as_deref(),
            language,
        )
    }

    /// Build the public, single-language view of this exhibition.
    pub fn localize(&self, language: Language, today: NaiveDate) -> ExhibitionView {
        ExhibitionView {
            id: self.id,
            title: self.title_in(language).to_string(),
            description: self.description_in(language).to_string(),
            location: self.location_in(language).to_string(),
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            status: exhibition_status(self.starts_on, self.ends_on, today),
            cover_image_url: self.cover_image_url.clone(),
            display_order: self.display_order,
        }
    }
}

impl Ordered for Exhibition {
    fn id(&self) -> DbId {
        self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// Derived presentation status relative to a reference date.
///
/// Fully undated exhibitions are shown as `past` (archive material). An
/// exhibition that has started, or whose end date has not passed, counts as
/// `current` -- a missing start with a future end is a running show, not
/// archive material.
pub fn exhibition_status(
    starts_on: Option<NaiveDate>,
    ends_on: Option<NaiveDate>,
    today: NaiveDate,
) -> &'static str {
    match (starts_on, ends_on) {
        (Some(start), _) if start > today => "upcoming",
        (_, Some(end)) if end >= today => "current",
        (Some(_), None) => "current",
        _ => "past",
    }
}

/// Public single-language projection of an exhibition.
#[derive(Debug, Clone, Serialize)]
pub struct ExhibitionView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub status: &'static str,
    pub cover_image_url: Option<String>,
    pub display_order: i32,
}

/// DTO for creating a new exhibition (default language only; placed last).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExhibition {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub cover_image_url: Option<String>,
}

/// DTO for updating an existing exhibition.
///
/// `language` routes the localizable fields; everything else applies as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExhibition {
    #[serde(default)]
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub cover_image_url: Option<String>,
}

impl UpdateExhibition {
    /// Reject edits that would blank the title's base value, which every
    /// language falls back to. Blank variants are fine.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_start_is_upcoming() {
        let status = exhibition_status(Some(date(2026, 12, 1)), None, date(2026, 8, 26));
        assert_eq!(status, "upcoming");
    }

    #[test]
    fn within_range_is_current() {
        let status = exhibition_status(
            Some(date(2026, 8, 1)),
            Some(date(2026, 9, 1)),
            date(2026, 8, 26),
        );
        assert_eq!(status, "current");
    }

    #[test]
    fn open_ended_started_is_current() {
        let status = exhibition_status(Some(date(2026, 8, 1)), None, date(2026, 8, 26));
        assert_eq!(status, "current");
    }

    #[test]
    fn ended_is_past() {
        let status = exhibition_status(
            Some(date(2025, 1, 1)),
            Some(date(2025, 2, 1)),
            date(2026, 8, 26),
        );
        assert_eq!(status, "past");
    }

    #[test]
    fn undated_is_past() {
        assert_eq!(exhibition_status(None, None, date(2026, 8, 26)), "past");
    }

    #[test]
    fn missing_start_with_future_end_is_current() {
        let status = exhibition_status(None, Some(date(2026, 12, 31)), date(2026, 8, 26));
        assert_eq!(status, "current");
    }

    #[test]
    fn missing_start_with_past_end_is_past() {
        let status = exhibition_status(None, Some(date(2025, 1, 1)), date(2026, 8, 26));
        assert_eq!(status, "past");
    }

    #[test]
    fn update_dto_rejects_blanking_base_title() {
        let input = UpdateExhibition {
            language: Language::En,
            title: Some("  ".into()),
            description: None,
            location: None,
            starts_on: None,
            ends_on: None,
            cover_image_url: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn ends_today_still_current() {
        let status = exhibition_status(
            Some(date(2026, 8, 1)),
            Some(date(2026, 8, 26)),
            date(2026, 8, 26),
        );
        assert_eq!(status, "current");
    }
}
