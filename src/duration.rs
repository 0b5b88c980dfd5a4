// SPDX-License-Identifier: MPL-2.0
//! Employment duration arithmetic and its localized formatting.
//!
//! Durations count whole calendar months and ignore the day of month:
//! 31 January to 1 February is one month, 1 January to 31 January is zero.
//! The result is what the experience section shows, not an exact interval.

use crate::error::{Error, Result};
use crate::i18n::Language;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ISO_DATE: &str = "%Y-%m-%d";
const PRESENT: &str = "present";

/// Separator between the two ends of a date range.
pub const RANGE_SEPARATOR: &str = " – ";

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_RU: [&str; 12] = [
    "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// End of an employment period: a fixed date or still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EndDate {
    Date(NaiveDate),
    Present,
}

impl EndDate {
    /// The concrete date to measure against, `today` for ongoing periods.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            EndDate::Date(date) => date,
            EndDate::Present => today,
        }
    }
}

impl FromStr for EndDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(PRESENT) {
            return Ok(EndDate::Present);
        }
        Ok(EndDate::Date(parse_date(s)?))
    }
}

impl TryFrom<String> for EndDate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EndDate> for String {
    fn from(end: EndDate) -> Self {
        end.to_string()
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Date(date) => write!(f, "{}", date.format(ISO_DATE)),
            EndDate::Present => f.write_str(PRESENT),
        }
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), ISO_DATE)?)
}

/// Whole months from `start` to `end`, ignoring the day of month.
///
/// Negative when `end` falls in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Picks the Russian word form: 1 → `one`, 2..=4 → `few`, 0 and 5+ → `many`.
fn plural_ru<'a>(n: u32, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match n {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

fn plural_en<'a>(n: u32, one: &'a str, other: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        other
    }
}

fn join_parts(years: Option<String>, months: Option<String>, zero: String) -> String {
    match (years, months) {
        (Some(y), Some(m)) => format!("{y} {m}"),
        (Some(y), None) => y,
        (None, Some(m)) => m,
        (None, None) => zero,
    }
}

pub fn format_duration_ru(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;
    join_parts(
        (years > 0).then(|| format!("{years} {}", plural_ru(years, "год", "года", "лет"))),
        (months > 0).then(|| {
            format!("{months} {}", plural_ru(months, "месяц", "месяца", "месяцев"))
        }),
        "0 месяцев".to_string(),
    )
}

pub fn format_duration_en(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;
    join_parts(
        (years > 0).then(|| format!("{years} {}", plural_en(years, "year", "years"))),
        (months > 0).then(|| format!("{months} {}", plural_en(months, "month", "months"))),
        "0 months".to_string(),
    )
}

pub fn format_duration(language: Language, total_months: u32) -> String {
    match language {
        Language::Ru => format_duration_ru(total_months),
        Language::En => format_duration_en(total_months),
    }
}

/// Duration text for a period, clamping periods that end before they start
/// to zero months.
pub fn duration_text(language: Language, start: NaiveDate, end: NaiveDate) -> String {
    let months = months_between(start, end).max(0) as u32;
    format_duration(language, months)
}

/// Built-in label for an ongoing period.
pub fn present_label(language: Language) -> &'static str {
    match language {
        Language::Ru => "настоящее время",
        Language::En => "Present",
    }
}

/// Abbreviated month and year, e.g. `Mar 2021` or `март 2021`.
pub fn format_month_year(language: Language, date: NaiveDate) -> String {
    let names = match language {
        Language::Ru => &MONTHS_RU,
        Language::En => &MONTHS_EN,
    };
    format!("{} {}", names[date.month0() as usize], date.year())
}

/// `start – end`, with `present` substituted for ongoing periods.
///
/// `present` overrides the built-in label when the dictionary provides one.
pub fn format_date_range(
    language: Language,
    start: NaiveDate,
    end: EndDate,
    present: Option<&str>,
) -> String {
    let end = match end {
        EndDate::Date(date) => format_month_year(language, date),
        EndDate::Present => present.unwrap_or(present_label(language)).to_string(),
    };
    format!(
        "{}{RANGE_SEPARATOR}{end}",
        format_month_year(language, start)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).expect("valid date")
    }

    #[test]
    fn months_between_ignores_day_of_month() {
        assert_eq!(months_between(date("2021-01-31"), date("2021-02-01")), 1);
        assert_eq!(months_between(date("2021-01-01"), date("2021-01-31")), 0);
    }

    #[test]
    fn months_between_matches_naive_formula_across_years() {
        let pairs = [
            ("2019-11-15", "2021-02-03"),
            ("2020-01-01", "2020-01-01"),
            ("2018-12-31", "2019-01-01"),
            ("2015-06-10", "2024-06-09"),
        ];
        for (start, end) in pairs {
            let (s, e) = (date(start), date(end));
            let expected = (e.year() - s.year()) * 12 + e.month() as i32 - s.month() as i32;
            let months = months_between(s, e);
            assert!(months >= 0, "{start}..{end}");
            assert_eq!(months, expected, "{start}..{end}");
        }
    }

    #[test]
    fn months_between_is_negative_when_reversed() {
        assert_eq!(months_between(date("2022-05-01"), date("2021-05-01")), -12);
    }

    #[test]
    fn russian_formatting_examples() {
        assert_eq!(format_duration_ru(0), "0 месяцев");
        assert_eq!(format_duration_ru(1), "1 месяц");
        assert_eq!(format_duration_ru(13), "1 год 1 месяц");
        assert_eq!(format_duration_ru(12), "1 год");
        assert_eq!(format_duration_ru(3), "3 месяца");
        assert_eq!(format_duration_ru(5), "5 месяцев");
        assert_eq!(format_duration_ru(11), "11 месяцев");
        assert_eq!(format_duration_ru(26), "2 года 2 месяца");
        assert_eq!(format_duration_ru(60), "5 лет");
        assert_eq!(format_duration_ru(52), "4 года 4 месяца");
    }

    #[test]
    fn english_formatting_examples() {
        assert_eq!(format_duration_en(24), "2 years");
        assert_eq!(format_duration_en(0), "0 months");
        assert_eq!(format_duration_en(1), "1 month");
        assert_eq!(format_duration_en(13), "1 year 1 month");
        assert_eq!(format_duration_en(14), "1 year 2 months");
    }

    #[test]
    fn duration_text_clamps_reversed_periods() {
        let text = duration_text(Language::En, date("2023-05-01"), date("2022-01-01"));
        assert_eq!(text, "0 months");
    }

    #[test]
    fn end_date_parses_sentinel_and_dates() {
        assert_eq!("present".parse::<EndDate>().unwrap(), EndDate::Present);
        assert_eq!("Present".parse::<EndDate>().unwrap(), EndDate::Present);
        assert_eq!(
            "2022-08-01".parse::<EndDate>().unwrap(),
            EndDate::Date(date("2022-08-01"))
        );
        assert!(matches!(
            "yesterday".parse::<EndDate>(),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn present_resolves_to_today() {
        let today = date("2026-10-16");
        assert_eq!(EndDate::Present.resolve(today), today);
        assert_eq!(
            EndDate::Date(date("2020-01-01")).resolve(today),
            date("2020-01-01")
        );
    }

    #[test]
    fn end_date_display_round_trips_through_string() {
        let end: String = EndDate::Date(date("2021-03-09")).into();
        assert_eq!(end, "2021-03-09");
        assert_eq!(String::from(EndDate::Present), "present");
    }

    #[test]
    fn date_range_uses_month_names_and_present_label() {
        let start = date("2021-03-15");
        assert_eq!(
            format_date_range(Language::En, start, EndDate::Present, None),
            "Mar 2021 – Present"
        );
        assert_eq!(
            format_date_range(Language::Ru, start, EndDate::Present, None),
            "март 2021 – настоящее время"
        );
        assert_eq!(
            format_date_range(Language::En, start, EndDate::Present, Some("now")),
            "Mar 2021 – now"
        );
        assert_eq!(
            format_date_range(Language::Ru, start, EndDate::Date(date("2023-12-01")), None),
            "март 2021 – дек. 2023"
        );
    }
}
