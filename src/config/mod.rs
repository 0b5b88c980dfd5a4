// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration stored in `site.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default language
//! - `[source]` - Where locales and partials are read from
//! - `[components]` - Partial slots (`[[components.slots]]`)
//! - `[ticker]` - Tech-stack rotation
//! - `[[experience]]` - Employment periods for the experience section
//!
//! # Examples
//!
//! ```no_run
//! use folio::config;
//! use std::path::Path;
//!
//! let (config, warning) = config::load(Path::new("site/site.toml"));
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("{} experience records", config.experience.len());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::components::{self, ComponentSlot};
use crate::error::{Error, Result};
use crate::experience::ExperienceRecord;
use crate::source::{ConfiguredSource, DirectorySource, EmbeddedSource, HttpSource};
use crate::ticker::{TechTicker, TickerInterval};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// General site settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language painted when the visitor has no saved preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    #[default]
    Directory,
    Http,
    Embedded,
}

/// Location of locales and component partials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Site root for `directory`, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Base URL for `http`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Partials injected before painting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentsConfig {
    #[serde(default = "components::default_slots")]
    pub slots: Vec<ComponentSlot>,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            slots: components::default_slots(),
        }
    }
}

/// Tech-stack ticker settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl TickerConfig {
    pub fn build(&self) -> TechTicker {
        let items = self
            .items
            .clone()
            .unwrap_or_else(|| DEFAULT_TECH_STACK.iter().map(|s| s.to_string()).collect());
        let interval = self
            .interval_ms
            .map(TickerInterval::new)
            .unwrap_or_default();
        TechTicker::new(items, interval)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub components: ComponentsConfig,

    #[serde(default)]
    pub ticker: TickerConfig,

    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
}

impl Config {
    /// Builds the configured source. A relative directory root is resolved
    /// against `site_dir`, the directory holding the config file.
    pub fn site_source(&self, site_dir: &Path) -> Result<ConfiguredSource> {
        match self.source.kind {
            SourceKind::Directory => {
                let root = match &self.source.root {
                    Some(root) if root.is_absolute() => root.clone(),
                    Some(root) => site_dir.join(root),
                    None => site_dir.to_path_buf(),
                };
                Ok(ConfiguredSource::Directory(DirectorySource::new(root)))
            }
            SourceKind::Http => {
                let base_url = self.source.base_url.clone().ok_or_else(|| {
                    Error::Config("source.kind = \"http\" requires source.base_url".into())
                })?;
                Ok(ConfiguredSource::Http(HttpSource::new(base_url)))
            }
            SourceKind::Embedded => Ok(ConfiguredSource::Embedded(EmbeddedSource)),
        }
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration at `path`.
///
/// Returns a tuple of (config, optional_warning). A missing file silently
/// yields the defaults; an unreadable or invalid one yields the defaults and
/// a warning.
pub fn load(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path, propagating errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
