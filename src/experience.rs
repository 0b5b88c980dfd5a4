// SPDX-License-Identifier: MPL-2.0
//! Employment periods shown in the experience section.

use crate::duration::{self, EndDate};
use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One job: the key ties it to `data-duration` / `data-date-range`
/// attributes in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub key: String,
    pub start: NaiveDate,
    pub end: EndDate,
}

impl ExperienceRecord {
    pub fn new(key: impl Into<String>, start: NaiveDate, end: EndDate) -> Self {
        Self {
            key: key.into(),
            start,
            end,
        }
    }

    pub fn months(&self, today: NaiveDate) -> i32 {
        duration::months_between(self.start, self.end.resolve(today))
    }

    pub fn duration_text(&self, language: Language, today: NaiveDate) -> String {
        duration::duration_text(language, self.start, self.end.resolve(today))
    }

    pub fn date_range_text(&self, language: Language, present: Option<&str>) -> String {
        duration::format_date_range(language, self.start, self.end, present)
    }
}

/// Looks a record up by key.
pub fn find<'a>(records: &'a [ExperienceRecord], key: &str) -> Option<&'a ExperienceRecord> {
    records.iter().find(|record| record.key == key)
}
