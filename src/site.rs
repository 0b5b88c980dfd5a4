// SPDX-License-Identifier: MPL-2.0
//! Page bootstrap: the startup sequence of the live page, run once.
//!
//! 1. pick the language (request, saved preference, config, Russian)
//! 2. fetch its dictionary and the component partials concurrently
//! 3. inject the partials, then paint once the dictionary is resident
//! 4. seed the tech ticker

use crate::applier::{ApplyReport, ContentApplier};
use crate::components::{inject_components, load_components};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::{self, Language, LocalizationContext, TranslationLoader};
use crate::page::Document;
use crate::preferences::{MemoryPreferences, PreferenceStore};
use crate::source::SiteSource;
use crate::switcher::LanguageSwitcher;
use chrono::NaiveDate;
use tracing::info;

/// A painted page together with the switcher that can repaint it.
pub struct OpenPage<S, P> {
    pub document: Document,
    pub switcher: LanguageSwitcher<S, P>,
    pub report: ApplyReport,
}

impl<S: SiteSource, P: PreferenceStore> OpenPage<S, P> {
    pub fn language(&self) -> Language {
        self.switcher.context().active()
    }

    pub fn markup(&self) -> String {
        self.document.to_markup()
    }

    pub async fn switch_to(&mut self, language: Language, today: NaiveDate) -> ApplyReport {
        self.report = self
            .switcher
            .switch_to(&mut self.document, language, today)
            .await;
        self.report
    }
}

/// Site configuration plus the source its resources come from.
#[derive(Debug, Clone)]
pub struct Site<S> {
    config: Config,
    source: S,
}

impl<S: SiteSource + Clone> Site<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the startup sequence on `template`.
    ///
    /// `requested` is an explicit language choice and beats the saved
    /// preference. Fails only when the template itself cannot be parsed.
    pub async fn open<P: PreferenceStore>(
        &self,
        template: &str,
        requested: Option<&str>,
        preferences: P,
        today: NaiveDate,
    ) -> Result<OpenPage<S, P>> {
        let mut document = Document::parse(template)?;
        let language = i18n::resolve_language(
            requested,
            preferences.language(),
            self.config.general.default_language.as_deref(),
        );
        info!(language = %language, source = %self.source.describe(), "opening page");

        let loader = TranslationLoader::new(self.source.clone());
        let (dictionary, components) = tokio::join!(
            loader.load(language),
            load_components(&self.source, &self.config.components.slots)
        );

        inject_components(&mut document, &components);

        let mut context = LocalizationContext::new(language);
        if let Some(dictionary) = dictionary {
            context.store_mut().insert(language, dictionary);
        }

        let mut switcher = LanguageSwitcher::new(
            loader,
            preferences,
            context,
            ContentApplier::new(self.config.experience.clone()),
        );
        let report = switcher.repaint(&mut document, today);
        self.config.ticker.build().seed(&mut document);

        Ok(OpenPage {
            document,
            switcher,
            report,
        })
    }

    /// Renders `template` in one language without touching saved
    /// preferences.
    pub async fn render(
        &self,
        template: &str,
        language: Language,
        today: NaiveDate,
    ) -> Result<(String, ApplyReport)> {
        let page = self
            .open(
                template,
                Some(language.code()),
                MemoryPreferences::default(),
                today,
            )
            .await?;
        Ok((page.markup(), page.report))
    }

    /// Renders `template` once per supported language.
    pub async fn render_all(
        &self,
        template: &str,
        today: NaiveDate,
    ) -> Result<Vec<(Language, String, ApplyReport)>> {
        let mut pages = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let (markup, report) = self.render(template, language, today).await?;
            pages.push((language, markup, report));
        }
        Ok(pages)
    }
}
