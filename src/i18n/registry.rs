//! Language registry: Single source of truth for the supported languages.
//!
//! The registry is ordered. The first entry is the primary language, the one a
//! visitor's locale is matched against. The second entry is the fallback used
//! whenever that match fails.

use crate::i18n::translations::{ENGLISH_TRANSLATION, FRENCH_TRANSLATION};
use crate::i18n::{Language, Translation};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,

    /// ISO 639-1 language code (e.g., "fr", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the language adopted when no locale matches (exactly one)
    pub is_fallback: bool,

    /// Localized content for this language
    pub translation: &'static Translation,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: [LanguageConfig; 2],
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration of a language.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// All languages, primary first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The language a visitor's locale is matched against.
    pub fn primary(&self) -> &LanguageConfig {
        &self.languages[0]
    }

    /// The language adopted when no preference or locale matches.
    pub fn fallback(&self) -> &LanguageConfig {
        &self.languages[1]
    }
}

/// Default language configurations: French (primary) and English (fallback).
fn default_languages() -> [LanguageConfig; 2] {
    [
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            is_fallback: false,
            translation: &FRENCH_TRANSLATION,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_fallback: true,
            translation: &ENGLISH_TRANSLATION,
        },
    ]
}
