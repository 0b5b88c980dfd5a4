// SPDX-License-Identifier: MPL-2.0
//! Supported page languages.

use crate::config::LOCALES_DIR;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language the page can be painted in.
///
/// The set is closed: every variant has a locale file and duration
/// pluralization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    /// Two-letter code used in file names, the `lang` attribute and state.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Conventional path of this language's dictionary inside a site source.
    pub fn locale_path(self) -> String {
        format!("{LOCALES_DIR}/{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts bare codes (`en`) as well as full tags (`en-US`, `ru_RU`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-");
        let id: LanguageIdentifier = normalized
            .parse()
            .map_err(|_| Error::UnsupportedLanguage(s.to_string()))?;
        match id.language.as_str() {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}
