//! The per-user preference record and its field types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Maximum stored length of a language name.
pub const MAX_LANGUAGE_LEN: usize = 20;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ValidationError::invalid_format(
                "theme",
                format!("expected 'light' or 'dark', got '{}'", other),
            )),
        }
    }
}

/// Preferred language, stored as a lowercase name ("english", "indonesia", ...).
///
/// The set is open-ended; the command assistant only ever sets the three
/// well-known values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub const ENGLISH: &'static str = "english";
    pub const INDONESIA: &'static str = "indonesia";
    pub const SPANISH: &'static str = "spanish";

    /// Creates a language from user input.
    ///
    /// The name is trimmed and lowercased; it must be 1-20 ASCII letters.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim().to_lowercase();
        if name.is_empty() {
            return Err(ValidationError::empty_field("language"));
        }
        let len = name.chars().count();
        if len > MAX_LANGUAGE_LEN {
            return Err(ValidationError::too_long("language", MAX_LANGUAGE_LEN, len));
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "language",
                "only ASCII letters are allowed",
            ));
        }
        Ok(Self(name))
    }

    pub fn english() -> Self {
        Self(Self::ENGLISH.to_string())
    }

    pub fn indonesia() -> Self {
        Self(Self::INDONESIA.to_string())
    }

    pub fn spanish() -> Self {
        Self(Self::SPANISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Language {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

/// The per-user settings tuple.
///
/// Exactly one record exists per user once the account is provisioned. The
/// record is created with defaults (light, english, notifications on) and
/// afterwards only mutated field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
}

impl PreferenceRecord {
    pub fn new(theme: Theme, language: Language, notifications: bool) -> Self {
        Self {
            theme,
            language,
            notifications,
        }
    }
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::english(),
            notifications: true,
        }
    }
}
