//! Language enumeration and localized-field resolution.
//!
//! Stored rows carry one column per language for each localizable attribute:
//! the bare column (`title`) holds the default language and is the fallback
//! for every other language; variant columns (`title_am`, `title_ru`) hold
//! translations and may be absent or blank. Resolution and write routing are
//! done by matching on [`Language`], never by string-building column names at
//! runtime; [`Language::field_name`] exists to pin the storage contract.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Supported content languages. Closed set, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English, the default language. Content lives in the bare columns.
    En,
    /// Armenian (`_am` columns).
    Am,
    /// Russian (`_ru` columns).
    Ru,
}

impl Language {
    /// The default language, whose content lives in unsuffixed columns.
    pub const DEFAULT: Language = Language::En;

    /// All supported languages, default first.
    pub const ALL: [Language; 3] = [Language::En, Language::Am, Language::Ru];

    /// Two-letter language code used in column suffixes and query params.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
            Language::Ru => "ru",
        }
    }

    /// Parse a language code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "en" => Some(Language::En),
            "am" => Some(Language::Am),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Parse a language code, falling back to the default language.
    ///
    /// Language is supplied by our own UI, not arbitrary user text, so an
    /// unknown code degrades to default-language behaviour instead of
    /// erroring.
    pub fn from_code_or_default(code: &str) -> Language {
        Language::from_code(code).unwrap_or(Language::DEFAULT)
    }

    pub fn is_default(self) -> bool {
        self == Language::DEFAULT
    }

    /// Column name holding `attribute` in this language.
    ///
    /// Bare name for the default language, `attribute_<code>` otherwise.
    /// The same convention governs reads and writes.
    pub fn field_name(self, attribute: &str) -> String {
        if self.is_default() {
            attribute.to_string()
        } else {
            format!("{attribute}_{}", self.code())
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code_or_default(&code))
    }
}

/// Resolve the effective value of a localizable attribute for display.
///
/// Fallback chain: requested-language variant, then the base value. A
/// variant that is absent or whitespace-only counts as missing. No
/// cross-variant fallback: a third language is never consulted.
pub fn resolve<'a>(
    base: &'a str,
    am: Option<&'a str>,
    ru: Option<&'a str>,
    language: Language,
) -> &'a str {
    let variant = match language {
        Language::En => return base,
        Language::Am => am,
        Language::Ru => ru,
    };
    match variant {
        Some(v) if !v.trim().is_empty() => v,
        _ => base,
    }
}

/// Write routing for one localizable attribute.
///
/// Exactly one slot is populated, chosen by the editing language. The
/// repository binds all three slots with `COALESCE($n, column)` so an edit in
/// language L creates or overwrites only L's column and never touches the
/// others. An empty patch (all `None`) leaves the attribute unchanged.
#[derive(Debug, Clone, Default)]
pub struct LocalizedPatch {
    pub base: Option<String>,
    pub am: Option<String>,
    pub ru: Option<String>,
}

impl LocalizedPatch {
    /// Route a submitted value to the column for `language`.
    ///
    /// `None` means the attribute was not part of the submitted form and
    /// produces an empty patch.
    pub fn for_language(language: Language, value: Option<String>) -> Self {
        let mut patch = LocalizedPatch::default();
        match language {
            Language::En => patch.base = value,
            Language::Am => patch.am = value,
            Language::Ru => patch.ru = value,
        }
        patch
    }
}
