//! Language type: the two locales the portfolio is published in.
//!
//! `Language` is a closed enum, so an unsupported code can never reach the
//! localization store. Parsing from user input goes through
//! [`Language::from_code`], which rejects anything that is not exactly one of
//! the registered codes.

use crate::i18n::{LanguageConfig, LanguageRegistry, Translation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning a string into a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    UnknownCode(String),
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every supported language, in registry order (primary first).
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// Create a Language from an exact language code ("fr" or "en").
    ///
    /// Matching is exact: "FR", " fr" or "fr-FR" are rejected. Use
    /// [`Language::from_locale`] for loose browser locale strings.
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| LanguageError::UnknownCode(code.to_string()))
    }

    /// Pick a language from a reported locale string such as "fr-FR" or "en-US".
    ///
    /// The locale is lowercased and checked for a prefix match against the
    /// primary language's code. Anything else, including an empty locale,
    /// yields the fallback language.
    pub fn from_locale(locale: &str) -> Language {
        let registry = LanguageRegistry::get();
        let primary = registry.primary();

        if locale.trim().to_lowercase().starts_with(primary.code) {
            primary.language
        } else {
            registry.fallback().language
        }
    }

    /// The language matched against the reported locale.
    pub fn primary() -> Language {
        LanguageRegistry::get().primary().language
    }

    /// The language used when nothing else matches.
    pub fn fallback() -> Language {
        LanguageRegistry::get().fallback().language
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Position of this language in the registry.
    pub(crate) fn index(&self) -> usize {
        match self {
            Language::French => 0,
            Language::English => 1,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The complete localized content for this language.
    pub fn translation(&self) -> &'static Translation {
        self.config().translation
    }

    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
