// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures that abort an operation outright.
///
/// Most of the localization pipeline degrades instead of failing (a missing
/// locale file paints the page untranslated, a missing key leaves the element
/// alone), so this type only shows up at the edges: reading templates and
/// config, writing outputs, and fetching resources before the loader
/// swallows the error.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Template(String),
    Locale(String),
    Network(String),
    InvalidDate(String),
    UnsupportedLanguage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Template(e) => write!(f, "Template Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::InvalidDate(e) => write!(f, "Invalid date: {}", e),
            Error::UnsupportedLanguage(code) => write!(f, "Unsupported language: {}", code),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Locale(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Template(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Template(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::InvalidDate(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_maps_to_locale_variant() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Locale(_)));
    }

    #[test]
    fn chrono_error_maps_to_invalid_date() {
        let parse_err = chrono::NaiveDate::parse_from_str("2021-13-40", "%Y-%m-%d").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn unsupported_language_display_names_code() {
        let err = Error::UnsupportedLanguage("de".into());
        assert_eq!(format!("{}", err), "Unsupported language: de");
    }
}
