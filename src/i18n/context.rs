// SPDX-License-Identifier: MPL-2.0
use super::{Language, LocaleDictionary, TranslationStore};

/// Active language plus every dictionary loaded so far.
///
/// Passed explicitly to the applier and owned by the switcher instead of
/// living in process-wide globals.
#[derive(Debug, Default, Clone)]
pub struct LocalizationContext {
    active: Language,
    store: TranslationStore,
}

impl LocalizationContext {
    pub fn new(active: Language) -> Self {
        Self {
            active,
            store: TranslationStore::new(),
        }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    pub fn set_active(&mut self, language: Language) {
        self.active = language;
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TranslationStore {
        &mut self.store
    }

    /// Dictionary for the active language, if it has been loaded.
    pub fn active_dictionary(&self) -> Option<&LocaleDictionary> {
        self.store.get(self.active)
    }

    /// Looks `key` up in the active dictionary.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.active_dictionary()?.lookup(key)
    }
}
