// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the application can display.
//!
//! Only members of this set are representable; anything else is rejected at
//! the parse boundary, so the rest of the crate never has to validate
//! language codes again.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// German. Its bundle ships embedded in the binary.
    De,
    /// English. Fetched from the remote bundle location.
    En,
}

impl Language {
    /// The language whose bundle is always available without any I/O.
    pub const FALLBACK: Language = Language::De;

    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// The ISO 639-1 code used in storage and bundle paths.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Human-readable name, in the language itself.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }

    /// Parses an exact language code. Returns `None` for anything outside
    /// the supported set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Matches a locale tag such as `en-GB` or `de_DE.UTF-8` by its primary
    /// subtag (the first two characters, by convention).
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let primary = tag.get(..2)?;
        Language::from_code(&primary.to_ascii_lowercase())
    }

    /// The other member of the two-element supported set.
    #[must_use]
    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// The language as a Fluent locale identifier.
    #[must_use]
    pub fn locale(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("static language code is a valid locale")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
