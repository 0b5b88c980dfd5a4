// SPDX-License-Identifier: MPL-2.0
//! Session-lifetime cache of loaded dictionaries.

use super::{Language, LocaleDictionary};
use std::collections::HashMap;

/// Loaded dictionaries keyed by language. Entries are never evicted; a
/// second insert for the same language replaces the first.
#[derive(Debug, Default, Clone)]
pub struct TranslationStore {
    dictionaries: HashMap<Language, LocaleDictionary>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: Language, dictionary: LocaleDictionary) {
        self.dictionaries.insert(language, dictionary);
    }

    pub fn get(&self, language: Language) -> Option<&LocaleDictionary> {
        self.dictionaries.get(&language)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.dictionaries.contains_key(&language)
    }

    pub fn loaded_languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.dictionaries.keys().copied()
    }
}
