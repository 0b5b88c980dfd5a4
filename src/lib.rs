// SPDX-License-Identifier: MPL-2.0
//! `folio` localizes a static portfolio page.
//!
//! It loads JSON locale dictionaries, paints a page template by resolving
//! dotted translation keys, computes "time employed" strings for the
//! experience section in Russian and English, and remembers the visitor's
//! preferred language.

pub mod applier;
pub mod components;
pub mod config;
pub mod duration;
pub mod error;
pub mod experience;
pub mod i18n;
pub mod page;
pub mod paths;
pub mod preferences;
pub mod site;
pub mod source;
pub mod switcher;
pub mod ticker;
