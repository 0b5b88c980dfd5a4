// SPDX-License-Identifier: MPL-2.0
//! Persisted visitor state using CBOR format.
//!
//! The state file plays the role the browser's local storage plays for the
//! live page: it remembers the preferred language between runs. It is kept
//! apart from `site.toml`, which describes the site rather than the visitor.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `FOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::i18n::Language;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteState {
    /// Language chosen with the switcher, if any.
    #[serde(default)]
    pub preferred_language: Option<Language>,
}

impl SiteState {
    /// Loads state from the default location.
    ///
    /// Returns `(state, warning)`: a missing file is not a problem, an
    /// unreadable one gives default state plus a warning for the log.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => (
                    Self::default(),
                    Some(format!("state file {} is unreadable: {err}", path.display())),
                ),
            },
            Err(err) => (
                Self::default(),
                Some(format!("cannot open state file {}: {err}", path.display())),
            ),
        }
    }

    /// Saves state to the default location. Returns a warning on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("no data directory available for state file".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                return Some(format!("cannot create {}: {err}", parent.display()));
            }
        }

        match fs::File::create(&path) {
            Ok(file) => ciborium::into_writer(self, BufWriter::new(file))
                .err()
                .map(|err| format!("cannot write state file {}: {err}", path.display())),
            Err(err) => Some(format!("cannot create state file {}: {err}", path.display())),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}
