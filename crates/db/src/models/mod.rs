//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Localizable attributes follow the column convention from
//! `atelier_core::i18n`: bare column for the default language, `_am`/`_ru`
//! variant columns for translations. Entities expose `*_in(lang)` accessors
//! and a `localize(lang)` view builder for the public API.

pub mod artwork;
pub mod exhibition;
pub mod exhibition_image;
pub mod media_item;
pub mod session;
pub mod user;
