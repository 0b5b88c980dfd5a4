// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Files**: Names of the files the site is made of
//! - **Ticker**: Tech-stack rotation list and interval bounds

// ==========================================================================
// File Defaults
// ==========================================================================

/// Site configuration file, looked up next to the template.
pub const CONFIG_FILE: &str = "site.toml";

/// Directory (relative to the site root) holding `<code>.json` dictionaries.
pub const LOCALES_DIR: &str = "locales";

// ==========================================================================
// Ticker Defaults
// ==========================================================================

/// Default delay between two ticker items (in milliseconds).
pub const DEFAULT_TICKER_INTERVAL_MS: u64 = 2000;

/// Minimum ticker delay (in milliseconds).
pub const MIN_TICKER_INTERVAL_MS: u64 = 250;

/// Maximum ticker delay (in milliseconds).
pub const MAX_TICKER_INTERVAL_MS: u64 = 60_000;

/// Items shown when the config does not list any.
pub const DEFAULT_TECH_STACK: [&str; 7] = [
    "Ruby-on-Rails",
    "JavaScript",
    "TypeScript",
    "React",
    "PostgreSQL",
    "Redis",
    "TailwindCSS",
];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TICKER_INTERVAL_MS > 0);
    assert!(MAX_TICKER_INTERVAL_MS >= MIN_TICKER_INTERVAL_MS);
    assert!(DEFAULT_TICKER_INTERVAL_MS >= MIN_TICKER_INTERVAL_MS);
    assert!(DEFAULT_TICKER_INTERVAL_MS <= MAX_TICKER_INTERVAL_MS);
    assert!(!DEFAULT_TECH_STACK.is_empty());
};
