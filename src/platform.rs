// SPDX-License-Identifier: MPL-2.0
//! Execution-context capabilities.
//!
//! The original front-end branched on "browser vs. server rendering"; here
//! that check is a strategy object. An interactive platform offers a
//! persisted language preference and a system locale; a non-interactive one
//! offers neither, and the manager must not even try.

use crate::config;
use crate::error::Result;
use crate::language::Language;

/// What the execution environment can do for language selection.
pub trait Platform {
    /// Whether persisted preferences and a locale are available at all.
    fn is_interactive(&self) -> bool;

    /// Reads the persisted language preference, if any valid one exists.
    fn stored_language(&self) -> Option<Language>;

    /// Persists `language` as the new preference.
    ///
    /// # Errors
    ///
    /// Returns an error when the preference cannot be written.
    fn store_language(&self, language: Language) -> Result<()>;

    /// The environment's configured locale tag, e.g. `en-GB`.
    fn system_locale(&self) -> Option<String>;
}

/// The interactive desktop environment: preference in the config file,
/// locale from the operating system.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    fn is_interactive(&self) -> bool {
        true
    }

    fn stored_language(&self) -> Option<Language> {
        let config = config::load().unwrap_or_default();
        config.language.as_deref().and_then(Language::from_code)
    }

    fn store_language(&self, language: Language) -> Result<()> {
        let mut config = config::load().unwrap_or_default();
        config.language = Some(language.code().to_string());
        config::save(&config)
    }

    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A non-interactive context (CI, prerendering). No storage, no locale.
#[derive(Debug, Default)]
pub struct HeadlessPlatform;

impl Platform for HeadlessPlatform {
    fn is_interactive(&self) -> bool {
        false
    }

    fn stored_language(&self) -> Option<Language> {
        None
    }

    fn store_language(&self, _language: Language) -> Result<()> {
        Ok(())
    }

    fn system_locale(&self) -> Option<String> {
        None
    }
}
