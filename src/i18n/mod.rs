// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! This module provides the data side of localization: which languages
//! exist, how their JSON dictionaries are fetched and cached, and how a
//! dotted key is resolved against the active one.
//!
//! # Features
//!
//! - Fixed set of supported languages with tag parsing (`en-US` → `en`)
//! - Nested JSON dictionaries with `a.b.c` lookup
//! - Session cache of loaded dictionaries
//! - Graceful loading: failures are logged and retried on the next switch
//! - Locale resolution from CLI, saved preference and config

pub mod context;
pub mod dictionary;
pub mod language;
pub mod loader;
pub mod store;

pub use context::LocalizationContext;
pub use dictionary::LocaleDictionary;
pub use language::Language;
pub use loader::TranslationLoader;
pub use store::TranslationStore;

use std::str::FromStr;
use tracing::warn;

/// Picks the language to paint first.
///
/// 1. Explicit request (CLI `--lang`)
/// 2. Saved preference
/// 3. Configured default
/// 4. Russian
///
/// An unparseable request is logged and skipped rather than rejected.
pub fn resolve_language(
    requested: Option<&str>,
    saved: Option<Language>,
    configured: Option<&str>,
) -> Language {
    if let Some(requested) = requested {
        match Language::from_str(requested) {
            Ok(language) => return language,
            Err(err) => warn!(%err, "ignoring requested language"),
        }
    }

    if let Some(saved) = saved {
        return saved;
    }

    if let Some(configured) = configured {
        match Language::from_str(configured) {
            Ok(language) => return language,
            Err(err) => warn!(%err, "ignoring configured default language"),
        }
    }

    Language::default()
}
