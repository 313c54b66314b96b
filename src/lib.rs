// SPDX-License-Identifier: MPL-2.0
//! `lingoswap` is the translation manager behind a small language-switching
//! front-end.
//!
//! It holds the current language selection and the active translation bundle
//! as observable state, initializes the language from a persisted preference
//! or the system locale, and loads Fluent bundles on language change: the
//! fallback bundle ships embedded in the binary, every other language is
//! fetched from a well-known remote location.

#![doc(html_root_url = "https://docs.rs/lingoswap/0.1.0")]

pub mod bundle;
pub mod config;
pub mod error;
pub mod fetch;
pub mod language;
pub mod manager;
pub mod platform;
