// SPDX-License-Identifier: MPL-2.0
//! Fetching locale dictionaries.

use super::{Language, LocaleDictionary};
use crate::source::SiteSource;
use tracing::{debug, warn};

/// Loads `locales/<code>.json` from a [`SiteSource`].
///
/// Fetch and parse errors are logged and reported as `None`; the page is
/// then painted without a dictionary and keeps its original text. The
/// loader keeps no state of its own, so checking the store before calling
/// (and not caching a failure) is the caller's job.
#[derive(Debug, Clone)]
pub struct TranslationLoader<S> {
    source: S,
}

impl<S: SiteSource> TranslationLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self, language: Language) -> Option<LocaleDictionary> {
        let path = language.locale_path();
        let bytes = match self.source.fetch(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(
                    language = %language,
                    source = %self.source.describe(),
                    error = %err,
                    "failed to fetch locale, continuing without translations"
                );
                return None;
            }
        };

        match LocaleDictionary::from_json(&bytes) {
            Ok(dictionary) => {
                debug!(language = %language, entries = dictionary.len(), "locale loaded");
                Some(dictionary)
            }
            Err(err) => {
                warn!(
                    language = %language,
                    error = %err,
                    "failed to parse locale, continuing without translations"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DirectorySource, EmbeddedSource};
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_locale_file_is_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        let loader = TranslationLoader::new(DirectorySource::new(dir.path()));
        assert!(loader.load(Language::En).await.is_none());
    }

    #[tokio::test]
    async fn malformed_locale_file_is_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("locales")).unwrap();
        std::fs::write(dir.path().join("locales/ru.json"), "{ broken").unwrap();

        let loader = TranslationLoader::new(DirectorySource::new(dir.path()));
        assert!(loader.load(Language::Ru).await.is_none());
    }

    #[tokio::test]
    async fn loads_dictionary_from_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("locales")).unwrap();
        std::fs::write(
            dir.path().join("locales/en.json"),
            r#"{"hero": {"title": "Hello"}}"#,
        )
        .unwrap();

        let loader = TranslationLoader::new(DirectorySource::new(dir.path()));
        let dict = loader.load(Language::En).await.expect("locale loads");
        assert_eq!(dict.lookup("hero.title"), Some("Hello"));
    }

    #[tokio::test]
    async fn bundled_locales_are_not_empty() {
        let loader = TranslationLoader::new(EmbeddedSource);
        for language in Language::ALL {
            let dict = loader.load(language).await;
            assert!(dict.is_some_and(|d| !d.is_empty()), "{language}");
        }
    }
}
