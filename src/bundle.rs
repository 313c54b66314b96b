// SPDX-License-Identifier: MPL-2.0
//! Fluent translation bundles.
//!
//! A [`TranslationBundle`] maps message keys to localized strings for one
//! language. The fallback language's bundle is embedded in the binary via
//! `rust-embed` and therefore always available without any I/O; every other
//! bundle is built from FTL source fetched at runtime.

use crate::error::{Error, Result};
use crate::language::Language;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Localized UI text for a single language.
pub struct TranslationBundle {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl TranslationBundle {
    /// Builds a bundle for `language` from FTL source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the source is not valid FTL or contains
    /// conflicting message ids.
    pub fn from_ftl(language: Language, source: String) -> Result<Self> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::Parse(format!(
                "invalid FTL for '{}': {} syntax error(s)",
                language.code(),
                errors.len()
            ))
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![language.locale()]);
        // Skip Unicode isolation marks around placeables; the UI renders
        // plain strings.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            Error::Parse(format!(
                "conflicting message ids in '{}' bundle: {} error(s)",
                language.code(),
                errors.len()
            ))
        })?;

        Ok(Self { language, bundle })
    }

    /// The fallback bundle shipped inside the binary.
    ///
    /// Invariant: this never fails. The asset is embedded at compile time,
    /// so a missing or malformed file is a packaging bug, not a runtime
    /// condition.
    #[must_use]
    pub fn embedded_default() -> Self {
        let filename = format!("{}.ftl", Language::FALLBACK.code());
        let content = Asset::get(&filename).expect("embedded fallback bundle is packaged");
        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        Self::from_ftl(Language::FALLBACK, source).expect("embedded fallback bundle parses")
    }

    /// The language this bundle was built for.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Looks up the message for `key`.
    ///
    /// Returns `MISSING: <key>` when the key is unknown, so a forgotten
    /// translation shows up in the UI instead of blanking it.
    #[must_use]
    pub fn message(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up the message for `key`, interpolating `args`.
    #[must_use]
    pub fn message_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let value = self.bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
