// SPDX-License-Identifier: MPL-2.0
//! Durable storage of the visitor's preferred language.

mod state;

pub use state::SiteState;

use crate::i18n::Language;
use std::path::PathBuf;
use tracing::warn;

/// Key/value storage for the one preference the page keeps.
pub trait PreferenceStore {
    fn language(&self) -> Option<Language>;

    /// Records the preferred language. Failures are logged, never raised.
    fn set_language(&mut self, language: Language);
}

/// Preferences that live only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    language: Option<Language>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn new(language: Option<Language>) -> Self {
        Self { language, writes: 0 }
    }

    /// How many times `set_language` was called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn language(&self) -> Option<Language> {
        self.language
    }

    fn set_language(&mut self, language: Language) {
        self.language = Some(language);
        self.writes += 1;
    }
}

/// Preferences backed by the CBOR state file.
#[derive(Debug, Clone)]
pub struct StatePreferences {
    state: SiteState,
    base_dir: Option<PathBuf>,
    /// The in-memory state differs from what was last written.
    dirty: bool,
}

impl StatePreferences {
    /// Loads the state file, falling back to defaults with a logged warning.
    pub fn load(base_dir: Option<PathBuf>) -> Self {
        let (state, warning) = SiteState::load_from(base_dir.clone());
        if let Some(warning) = warning {
            warn!("{warning}");
        }
        Self {
            state,
            base_dir,
            dirty: false,
        }
    }

    /// Read-only copy of the saved preference: painting with it never
    /// touches the state file.
    pub fn snapshot(&self) -> MemoryPreferences {
        MemoryPreferences::new(self.state.preferred_language)
    }
}

impl PreferenceStore for StatePreferences {
    fn language(&self) -> Option<Language> {
        self.state.preferred_language
    }

    fn set_language(&mut self, language: Language) {
        if self.state.preferred_language == Some(language) && !self.dirty {
            return;
        }
        self.state.preferred_language = Some(language);
        match self.state.save_to(self.base_dir.clone()) {
            Some(warning) => {
                warn!("{warning}");
                self.dirty = true;
            }
            None => self.dirty = false,
        }
    }
}
