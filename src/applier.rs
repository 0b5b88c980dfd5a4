// SPDX-License-Identifier: MPL-2.0
//! Paints a document in the active language.
//!
//! Elements opt in through attributes:
//!
//! | attribute          | effect                                              |
//! |--------------------|-----------------------------------------------------|
//! | `data-i18n`        | text (or `placeholder` on inputs) from the dictionary |
//! | `data-i18n-html`   | with `data-i18n`: value is inserted as markup       |
//! | `data-duration`    | formatted length of the named experience record     |
//! | `data-date-range`  | formatted start/end of the named experience record  |

use crate::experience::{self, ExperienceRecord};
use crate::i18n::{Language, LocalizationContext};
use crate::page::{Document, Element};
use crate::preferences::PreferenceStore;
use chrono::NaiveDate;
use tracing::debug;

pub const ATTR_KEY: &str = "data-i18n";
pub const ATTR_HTML: &str = "data-i18n-html";
pub const ATTR_DURATION: &str = "data-duration";
pub const ATTR_DATE_RANGE: &str = "data-date-range";

/// Dictionary key overriding the built-in "present" label.
pub const PRESENT_KEY: &str = "experience.present";

/// What one paint pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements whose content came from the dictionary.
    pub translated: usize,
    /// Tagged elements left alone because their key did not resolve.
    pub skipped: usize,
    /// Duration and date-range elements refreshed.
    pub computed: usize,
}

/// Writes one resolved value into an element.
fn write_value(element: &mut Element, value: &str) {
    if matches!(element.name.as_str(), "input" | "textarea") {
        element.set_attr("placeholder", value);
    } else if element.has_attr(ATTR_HTML) {
        element.set_inner_html(value);
    } else {
        element.set_text(value);
    }
}

/// Resolves every `data-i18n` element against the active dictionary.
///
/// Unresolved keys are counted and otherwise ignored; the element keeps
/// whatever it already showed.
pub fn apply_translations(document: &mut Document, context: &LocalizationContext) -> ApplyReport {
    let mut report = ApplyReport::default();
    document.walk_mut(&mut |element| {
        let Some(key) = element.attr(ATTR_KEY).map(str::to_owned) else {
            return;
        };
        match context.lookup(&key) {
            Some(value) => {
                write_value(element, value);
                report.translated += 1;
            }
            None => {
                debug!(%key, language = %context.active(), "no translation, keeping content");
                report.skipped += 1;
            }
        }
    });
    report
}

/// Rewrites every duration and date-range element. Returns how many were
/// written; unknown record keys are skipped.
pub fn refresh_durations(
    document: &mut Document,
    language: Language,
    present: Option<&str>,
    records: &[ExperienceRecord],
    today: NaiveDate,
) -> usize {
    let mut computed = 0;
    document.walk_mut(&mut |element| {
        if let Some(key) = element.attr(ATTR_DURATION).map(str::to_owned) {
            match experience::find(records, &key) {
                Some(record) => {
                    element.set_text(record.duration_text(language, today));
                    computed += 1;
                }
                None => debug!(%key, "no experience record for duration"),
            }
        }
        if let Some(key) = element.attr(ATTR_DATE_RANGE).map(str::to_owned) {
            match experience::find(records, &key) {
                Some(record) => {
                    element.set_text(record.date_range_text(language, present));
                    computed += 1;
                }
                None => debug!(%key, "no experience record for date range"),
            }
        }
    });
    computed
}

/// Full paint: translations, `lang` attribute, saved preference, durations.
#[derive(Debug, Clone, Default)]
pub struct ContentApplier {
    records: Vec<ExperienceRecord>,
}

impl ContentApplier {
    pub fn new(records: Vec<ExperienceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExperienceRecord] {
        &self.records
    }

    pub fn apply<P: PreferenceStore>(
        &self,
        document: &mut Document,
        context: &LocalizationContext,
        preferences: &mut P,
        today: NaiveDate,
    ) -> ApplyReport {
        let language = context.active();
        let mut report = apply_translations(document, context);

        if let Some(root) = document.root_element_mut() {
            if root.name == "html" {
                root.set_attr("lang", language.code());
            }
        }

        preferences.set_language(language);

        report.computed = refresh_durations(
            document,
            language,
            context.lookup(PRESENT_KEY),
            &self.records,
            today,
        );

        debug!(
            language = %language,
            translated = report.translated,
            skipped = report.skipped,
            computed = report.computed,
            "page painted"
        );
        report
    }
}
