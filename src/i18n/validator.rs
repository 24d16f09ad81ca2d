//! Translation consistency validation.
//!
//! The localization store is static data, so mistakes only show up as odd
//! rendering. This module checks each translation on its own (required
//! strings present, unique project titles, expected placeholders) and the
//! translations against each other (same number of entries, same project
//! metadata, same placeholder sets).

use crate::i18n::{Language, LanguageRegistry, ProjectCategory, Translation};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break an invariant of the store
    pub errors: Vec<String>,

    /// Suspicious content that still renders
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings to this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the localization store.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder regex is valid")
    })
}

impl TranslationValidator {
    /// Validate every registered translation, alone and against the fallback.
    pub fn validate_all() -> ValidationReport {
        let registry = LanguageRegistry::get();
        let reference = registry.fallback();
        let mut report = ValidationReport::new();

        for config in registry.list_all() {
            report.merge(Self::validate(config.language, config.translation));

            if config.language != reference.language {
                report.merge(Self::validate_parity(
                    (reference.language, reference.translation),
                    (config.language, config.translation),
                ));
            }
        }

        report
    }

    /// Validate a single translation.
    pub fn validate(language: Language, translation: &Translation) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (field, value) in Self::required_fields(translation) {
            if value.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] required field '{}' is empty", language, field));
            }
        }

        let mut seen = HashSet::new();
        for project in translation.projects.items {
            if !seen.insert(project.title) {
                report.errors.push(format!(
                    "[{}] duplicate project title '{}'",
                    language, project.title
                ));
            }
            if project.description.is_empty() {
                report.warnings.push(format!(
                    "[{}] project '{}' has no description lines",
                    language, project.title
                ));
            }
            if let Some(link) = project.link {
                if !link.starts_with("https://") && !link.starts_with("http://") {
                    report.warnings.push(format!(
                        "[{}] project '{}' link is not an absolute URL: {}",
                        language, project.title, link
                    ));
                }
            }
        }

        for category in ProjectCategory::ALL {
            if !translation.projects.items.iter().any(|p| p.category == category) {
                report.warnings.push(format!(
                    "[{}] no project in category '{}', its filter will show an empty list",
                    language,
                    category.key()
                ));
            }
        }

        for experience in translation.experience.items {
            if experience.description.is_empty() {
                report.warnings.push(format!(
                    "[{}] experience '{}' has no description lines",
                    language, experience.title
                ));
            }
        }

        if !Self::extract_placeholders(translation.hero.subtitle).contains("age") {
            report.warnings.push(format!(
                "[{}] hero subtitle does not mention {{{{age}}}}",
                language
            ));
        }

        report
    }

    /// Compare two translations for structural parity.
    pub fn validate_parity(
        reference: (Language, &Translation),
        candidate: (Language, &Translation),
    ) -> ValidationReport {
        let (ref_lang, expected) = reference;
        let (lang, actual) = candidate;
        let mut report = ValidationReport::new();

        let counts = [
            (
                "experience.items",
                expected.experience.items.len(),
                actual.experience.items.len(),
            ),
            (
                "education.items",
                expected.education.items.len(),
                actual.education.items.len(),
            ),
            (
                "projects.items",
                expected.projects.items.len(),
                actual.projects.items.len(),
            ),
            (
                "languages.items",
                expected.languages.items.len(),
                actual.languages.items.len(),
            ),
            (
                "interests.items",
                expected.interests.items.len(),
                actual.interests.items.len(),
            ),
        ];
        for (field, want, got) in counts {
            if want != got {
                report.errors.push(format!(
                    "{} has {} entries in [{}] but {} in [{}]",
                    field, got, lang, want, ref_lang
                ));
            }
        }

        for (index, (a, b)) in expected
            .projects
            .items
            .iter()
            .zip(actual.projects.items)
            .enumerate()
        {
            if a.category != b.category {
                report.errors.push(format!(
                    "projects.items[{}] category differs between [{}] and [{}]",
                    index, ref_lang, lang
                ));
            }
            if a.link != b.link {
                report.warnings.push(format!(
                    "projects.items[{}] link differs between [{}] and [{}]",
                    index, ref_lang, lang
                ));
            }
            if a.year != b.year {
                report.warnings.push(format!(
                    "projects.items[{}] year differs between [{}] and [{}]",
                    index, ref_lang, lang
                ));
            }
        }

        let pairs = Self::required_fields(expected)
            .into_iter()
            .zip(Self::required_fields(actual));
        for ((field, a), (_, b)) in pairs {
            let want = Self::extract_placeholders(a);
            let got = Self::extract_placeholders(b);
            if want != got {
                report.errors.push(format!(
                    "placeholder mismatch in '{}': [{}] has {:?}, [{}] has {:?}",
                    field, ref_lang, want, lang, got
                ));
            }
        }

        report
    }

    /// Extract `{{name}}` placeholder names from a template string.
    pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn required_fields(t: &Translation) -> Vec<(&'static str, &'static str)> {
        vec![
            ("meta.title", t.meta.title),
            ("meta.description", t.meta.description),
            ("nav.about", t.nav.about),
            ("nav.experience", t.nav.experience),
            ("nav.projects", t.nav.projects),
            ("nav.contact", t.nav.contact),
            ("hero.greeting", t.hero.greeting),
            ("hero.title", t.hero.title),
            ("hero.subtitle", t.hero.subtitle),
            ("hero.location", t.hero.location),
            ("hero.call_to_action", t.hero.call_to_action),
            ("about.title", t.about.title),
            ("about.intro", t.about.intro),
            ("about.birth_date_label", t.about.birth_date_label),
            ("about.age_suffix", t.about.age_suffix),
            ("about.email_label", t.about.email_label),
            ("about.location_label", t.about.location_label),
            ("about.location_value", t.about.location_value),
            ("about.socials_label", t.about.socials_label),
            ("about.download_resume", t.about.download_resume),
            ("experience.title", t.experience.title),
            ("education.title", t.education.title),
            ("projects.title", t.projects.title),
            ("projects.filter_all", t.projects.filter_all),
            ("projects.filter_academic", t.projects.filter_academic),
            ("projects.filter_personal", t.projects.filter_personal),
            ("projects.link_label", t.projects.link_label),
            ("languages.title", t.languages.title),
            ("interests.title", t.interests.title),
            ("contact.title", t.contact.title),
            ("contact.subtitle", t.contact.subtitle),
            ("contact.email_label", t.contact.email_label),
            ("contact.social_label", t.contact.social_label),
        ]
    }
}
