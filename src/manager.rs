// SPDX-License-Identifier: MPL-2.0
//! The translation manager.
//!
//! Holds the current language, the active bundle, and a loading flag as
//! observable state in a [`watch`] channel. UI code reads snapshots or
//! subscribes for change notification; the only mutations are
//! [`TranslationManager::set_language`] and
//! [`TranslationManager::toggle_language`].
//!
//! Loading is best-effort by design: a failed fetch is logged and degrades
//! to the embedded fallback bundle, never to an error the caller has to
//! handle. The UI must never be left without any text.
//!
//! Overlapping `set_language` calls are not coordinated; a slower earlier
//! fetch can overwrite a faster later one (last-write-wins). Known
//! limitation, not a contract.

use crate::bundle::TranslationBundle;
use crate::error::Result;
use crate::fetch::BundleFetcher;
use crate::language::Language;
use crate::platform::Platform;
use std::sync::Arc;
use tokio::sync::watch;

/// One observable snapshot of the manager.
#[derive(Clone)]
pub struct TranslationState {
    /// The selected language. Updated before its bundle finishes loading.
    pub language: Language,
    /// The active bundle: the last successfully loaded one, or the embedded
    /// default when the last load failed.
    pub bundle: Arc<TranslationBundle>,
    /// True only while a remote fetch is outstanding.
    pub is_loading: bool,
}

pub struct TranslationManager<P, F> {
    platform: P,
    fetcher: F,
    default_bundle: Arc<TranslationBundle>,
    state: watch::Sender<TranslationState>,
}

impl<P: Platform, F: BundleFetcher> TranslationManager<P, F> {
    /// Creates the manager and runs language detection and the initial load.
    ///
    /// Detection order: non-interactive platforms get the fallback outright;
    /// otherwise the persisted preference wins, then the system locale's
    /// primary subtag, then the fallback.
    pub async fn initialize(platform: P, fetcher: F) -> Self {
        let language = detect_language(&platform);
        let default_bundle = Arc::new(TranslationBundle::embedded_default());
        let (state, _) = watch::channel(TranslationState {
            language,
            bundle: default_bundle.clone(),
            is_loading: false,
        });

        let manager = Self {
            platform,
            fetcher,
            default_bundle,
            state,
        };
        manager.load(language).await;
        manager
    }

    /// The currently selected language.
    #[must_use]
    pub fn current_language(&self) -> Language {
        self.state.borrow().language
    }

    /// Whether a remote bundle fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// The active translation bundle.
    #[must_use]
    pub fn bundle(&self) -> Arc<TranslationBundle> {
        self.state.borrow().bundle.clone()
    }

    /// Looks up `key` in the active bundle.
    #[must_use]
    pub fn message(&self, key: &str) -> String {
        self.state.borrow().bundle.message(key)
    }

    /// A receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TranslationState> {
        self.state.subscribe()
    }

    /// Switches to `language` and loads its bundle.
    ///
    /// A no-op when `language` is already selected: no storage write, no
    /// fetch. Otherwise the selection is observable immediately, before the
    /// bundle arrives, so the UI can render the new language's chrome while
    /// text is still loading. Resolves once loading completes, successfully
    /// or by falling back.
    pub async fn set_language(&self, language: Language) {
        if language == self.current_language() {
            return;
        }

        self.state.send_modify(|state| state.language = language);

        if self.platform.is_interactive() {
            if let Err(error) = self.platform.store_language(language) {
                eprintln!("Failed to persist language preference: {}", error);
            }
        }

        self.load(language).await;
    }

    /// Switches to the other language of the two-element supported set.
    pub async fn toggle_language(&self) {
        self.set_language(self.current_language().toggled()).await;
    }

    async fn load(&self, language: Language) {
        if language == Language::FALLBACK {
            // Embedded bundle, no I/O; the loading flag is never touched.
            let bundle = self.default_bundle.clone();
            self.state.send_modify(|state| state.bundle = bundle);
            return;
        }

        self.state.send_modify(|state| state.is_loading = true);

        let bundle = match self.fetch_bundle(language).await {
            Ok(bundle) => Arc::new(bundle),
            Err(error) => {
                // Fallback-on-error: the selection stays, only the text
                // degrades to the default bundle.
                eprintln!(
                    "Failed to load '{}' translations: {}",
                    language.code(),
                    error
                );
                self.default_bundle.clone()
            }
        };

        self.state.send_modify(|state| {
            state.bundle = bundle;
            state.is_loading = false;
        });
    }

    async fn fetch_bundle(&self, language: Language) -> Result<TranslationBundle> {
        let source = self.fetcher.fetch_ftl(language).await?;
        TranslationBundle::from_ftl(language, source)
    }
}

fn detect_language<P: Platform>(platform: &P) -> Language {
    if !platform.is_interactive() {
        return Language::FALLBACK;
    }
    if let Some(stored) = platform.stored_language() {
        return stored;
    }
    if let Some(locale) = platform.system_locale() {
        if let Some(language) = Language::from_locale_tag(&locale) {
            return language;
        }
    }
    Language::FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePlatform {
        interactive: bool,
        stored: Option<Language>,
        locale: Option<&'static str>,
    }

    impl Platform for FakePlatform {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn stored_language(&self) -> Option<Language> {
            self.stored
        }

        fn store_language(&self, _language: Language) -> Result<()> {
            Ok(())
        }

        fn system_locale(&self) -> Option<String> {
            self.locale.map(str::to_string)
        }
    }

    #[test]
    fn detect_language_prefers_stored_preference() {
        let platform = FakePlatform {
            interactive: true,
            stored: Some(Language::En),
            locale: Some("de-DE"),
        };
        assert_eq!(detect_language(&platform), Language::En);
    }

    #[test]
    fn detect_language_falls_back_to_system_locale() {
        let platform = FakePlatform {
            interactive: true,
            stored: None,
            locale: Some("en-GB"),
        };
        assert_eq!(detect_language(&platform), Language::En);
    }

    #[test]
    fn detect_language_ignores_unsupported_locale() {
        let platform = FakePlatform {
            interactive: true,
            stored: None,
            locale: Some("fr-FR"),
        };
        assert_eq!(detect_language(&platform), Language::FALLBACK);
    }

    #[test]
    fn detect_language_skips_everything_when_non_interactive() {
        let platform = FakePlatform {
            interactive: false,
            stored: Some(Language::En),
            locale: Some("en-US"),
        };
        assert_eq!(detect_language(&platform), Language::FALLBACK);
    }

    #[test]
    fn detect_language_defaults_without_any_signal() {
        let platform = FakePlatform {
            interactive: true,
            stored: None,
            locale: None,
        };
        assert_eq!(detect_language(&platform), Language::FALLBACK);
    }
}
