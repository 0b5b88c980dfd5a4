// SPDX-License-Identifier: MPL-2.0
//! Language switching: load if needed, then repaint.

use crate::applier::{ApplyReport, ContentApplier};
use crate::i18n::{Language, LocalizationContext, TranslationLoader};
use crate::page::Document;
use crate::preferences::PreferenceStore;
use crate::source::SiteSource;
use chrono::NaiveDate;
use tracing::info;

/// Owns the localization context and everything needed to repaint.
///
/// Switches take `&mut self`, so on one switcher they run one after the
/// other and the last call decides the active language.
pub struct LanguageSwitcher<S, P> {
    loader: TranslationLoader<S>,
    preferences: P,
    context: LocalizationContext,
    applier: ContentApplier,
}

impl<S: SiteSource, P: PreferenceStore> LanguageSwitcher<S, P> {
    pub fn new(
        loader: TranslationLoader<S>,
        preferences: P,
        context: LocalizationContext,
        applier: ContentApplier,
    ) -> Self {
        Self {
            loader,
            preferences,
            context,
            applier,
        }
    }

    pub fn context(&self) -> &LocalizationContext {
        &self.context
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn loader(&self) -> &TranslationLoader<S> {
        &self.loader
    }

    /// Makes sure `language` has a resident dictionary, fetching it only
    /// when the store has none. A failed load is not stored, so the next
    /// call fetches again. Returns whether a fetch happened.
    pub async fn ensure_loaded(&mut self, language: Language) -> bool {
        if self.context.store().contains(language) {
            return false;
        }
        if let Some(dictionary) = self.loader.load(language).await {
            self.context.store_mut().insert(language, dictionary);
        }
        true
    }

    /// Switches the page to `language` and repaints it.
    pub async fn switch_to(
        &mut self,
        document: &mut Document,
        language: Language,
        today: NaiveDate,
    ) -> ApplyReport {
        self.ensure_loaded(language).await;
        self.context.set_active(language);
        info!(language = %language, "switching language");
        self.repaint(document, today)
    }

    /// Paints the document in the current language without loading.
    pub fn repaint(&mut self, document: &mut Document, today: NaiveDate) -> ApplyReport {
        self.applier
            .apply(document, &self.context, &mut self.preferences, today)
    }

    pub fn into_parts(self) -> (LocalizationContext, P) {
        (self.context, self.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::parse_date;
    use crate::error::Result;
    use crate::preferences::MemoryPreferences;
    use crate::source::DirectorySource;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct CountingSource {
        files: HashMap<String, String>,
        fetches: Arc<AtomicUsize>,
    }

    impl SiteSource for CountingSource {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.files
                .get(path)
                .map(|s| s.as_bytes().to_vec())
                .ok_or_else(|| crate::error::Error::Io(format!("{path} missing")))
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    fn switcher(source: CountingSource) -> LanguageSwitcher<CountingSource, MemoryPreferences> {
        LanguageSwitcher::new(
            TranslationLoader::new(source),
            MemoryPreferences::default(),
            LocalizationContext::new(Language::Ru),
            ContentApplier::default(),
        )
    }

    fn source() -> CountingSource {
        let mut files = HashMap::new();
        files.insert("locales/en.json".to_string(), r#"{"t": "Hello"}"#.to_string());
        files.insert("locales/ru.json".to_string(), r#"{"t": "Привет"}"#.to_string());
        CountingSource {
            files,
            fetches: Arc::default(),
        }
    }

    #[tokio::test]
    async fn switching_twice_fetches_once() {
        let source = source();
        let fetches = source.fetches.clone();
        let mut switcher = switcher(source);
        let mut doc = Document::parse(r#"<p data-i18n="t">?</p>"#).unwrap();
        let today = parse_date("2026-10-16").unwrap();

        switcher.switch_to(&mut doc, Language::En, today).await;
        switcher.switch_to(&mut doc, Language::En, today).await;

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(doc.to_markup(), r#"<p data-i18n="t">Hello</p>"#);
        assert_eq!(switcher.preferences().language(), Some(Language::En));
    }

    #[tokio::test]
    async fn switching_back_reuses_cached_dictionary() {
        let source = source();
        let fetches = source.fetches.clone();
        let mut switcher = switcher(source);
        let mut doc = Document::parse(r#"<p data-i18n="t">?</p>"#).unwrap();
        let today = parse_date("2026-10-16").unwrap();

        switcher.switch_to(&mut doc, Language::Ru, today).await;
        switcher.switch_to(&mut doc, Language::En, today).await;
        switcher.switch_to(&mut doc, Language::Ru, today).await;

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(doc.to_markup(), r#"<p data-i18n="t">Привет</p>"#);
        assert_eq!(switcher.context().active(), Language::Ru);
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let source = CountingSource::default();
        let fetches = source.fetches.clone();
        let mut switcher = switcher(source);

        assert!(switcher.ensure_loaded(Language::En).await);
        assert!(!switcher.context().store().contains(Language::En));
        assert!(switcher.ensure_loaded(Language::En).await);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn locale_that_appears_later_is_picked_up() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut switcher = LanguageSwitcher::new(
            TranslationLoader::new(DirectorySource::new(dir.path())),
            MemoryPreferences::default(),
            LocalizationContext::new(Language::Ru),
            ContentApplier::default(),
        );
        let mut doc = Document::parse(r#"<p data-i18n="t">?</p>"#).unwrap();
        let today = parse_date("2026-10-16").unwrap();

        let report = switcher.switch_to(&mut doc, Language::En, today).await;
        assert_eq!(report.skipped, 1);
        assert_eq!(doc.to_markup(), r#"<p data-i18n="t">?</p>"#);
        assert_eq!(switcher.context().active(), Language::En);

        std::fs::create_dir_all(dir.path().join("locales")).unwrap();
        std::fs::write(dir.path().join("locales/en.json"), r#"{"t": "Hello"}"#).unwrap();

        switcher.switch_to(&mut doc, Language::Ru, today).await;
        switcher.switch_to(&mut doc, Language::En, today).await;
        assert_eq!(doc.to_markup(), r#"<p data-i18n="t">Hello</p>"#);
    }
}
