//! Presentation controller: the page's view state and the rules that drive it.
//!
//! The controller resolves the active language once when the page mounts,
//! then changes it only on explicit request. Every change (the initial one
//! included) persists the language and updates the document metadata. The
//! project filter and the derived age are plain view state; none of this ever
//! writes to the localization store.

use crate::document::DocumentEffects;
use crate::i18n::{for_language, Language, Project, ProjectCategory, Translation};
use crate::metrics::ViewMetrics;
use crate::preferences::{PreferenceStore, STORAGE_KEY};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown project filter: '{0}'")]
    UnknownKey(String),
}

/// Selection criterion for the visible project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Filters in the order the filter bar shows them.
    pub const ALL: [ProjectFilter; 3] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::Academic),
        ProjectFilter::Category(ProjectCategory::Personal),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(category) => category.key(),
        }
    }

    /// Localized filter button label.
    pub fn label(&self, translation: &Translation) -> &'static str {
        match self {
            ProjectFilter::All => translation.projects.filter_all,
            ProjectFilter::Category(category) => translation.projects.category_label(*category),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == *category,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectFilter::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| FilterError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for ProjectFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Decide the language for a fresh page.
///
/// 1. A stored value that is exactly a supported code wins.
/// 2. Otherwise a locale starting with the primary code (case-insensitive)
///    selects the primary language.
/// 3. Anything else, including no locale at all, selects the fallback.
pub fn resolve_language(stored: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(language) = stored.and_then(|code| Language::from_code(code).ok()) {
        return language;
    }

    match locale {
        Some(locale) => Language::from_locale(locale),
        None => Language::fallback(),
    }
}

/// Whole calendar years between `birth` and `today`.
///
/// A year only counts once its anniversary has been reached, so the day
/// before a birthday still reports the previous age. Dates before `birth`
/// yield 0.
pub fn calendar_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// Order-preserving view of the projects selected by `filter`.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|project| filter.matches(project)).collect()
}

/// Session-local view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub language: Language,
    pub filter: ProjectFilter,
    pub age: u32,
}

/// Owns the view state of one page and the boundaries it writes through.
pub struct PresentationController<P, D> {
    preferences: P,
    document: D,
    state: ViewState,
}

impl<P: PreferenceStore, D: DocumentEffects> PresentationController<P, D> {
    /// Mount the page: resolve the language once and apply its effects.
    pub fn mount(preferences: P, document: D, locale: Option<&str>, age: u32) -> Self {
        let stored = preferences.get(STORAGE_KEY);
        let language = resolve_language(stored.as_deref(), locale);
        debug!(
            "Resolved language {} (stored: {:?}, locale: {:?})",
            language, stored, locale
        );

        let mut controller = Self {
            preferences,
            document,
            state: ViewState {
                language,
                filter: ProjectFilter::All,
                age,
            },
        };
        controller.apply_language_effects();
        controller
    }

    /// Switch to `language` and apply the language side effects.
    pub fn set_language(&mut self, language: Language) {
        if language != self.state.language {
            ViewMetrics::global().record_language_change();
        }
        self.state.language = language;
        self.apply_language_effects();
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        if filter != self.state.filter {
            ViewMetrics::global().record_filter_change();
        }
        self.state.filter = filter;
    }

    /// Recompute the age for `today`.
    pub fn refresh_age(&mut self, birth: NaiveDate, today: NaiveDate) -> u32 {
        self.state.age = calendar_age(birth, today);
        self.state.age
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Content for the active language.
    pub fn translation(&self) -> &'static Translation {
        for_language(self.state.language)
    }

    /// Projects of the active language that pass the active filter.
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(self.translation().projects.items, self.state.filter)
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Tear down the page and hand back its boundaries.
    pub fn into_parts(self) -> (P, D) {
        (self.preferences, self.document)
    }

    /// Persist the language and mirror it into the document metadata.
    ///
    /// Idempotent: running it twice for the same language leaves the same
    /// storage and document state as running it once.
    fn apply_language_effects(&mut self) {
        let language = self.state.language;
        let meta = &for_language(language).meta;

        self.preferences.set(STORAGE_KEY, language.code());
        self.document.set_lang(language.code());
        self.document.set_title(meta.title);
        if !self.document.set_meta_description(meta.description) {
            debug!("No meta description element, skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentHead;
    use crate::preferences::MemoryPreferenceStore;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mount(
        stored: Option<&str>,
        locale: Option<&str>,
    ) -> PresentationController<MemoryPreferenceStore, DocumentHead> {
        let prefs = match stored {
            Some(value) => MemoryPreferenceStore::with_value(STORAGE_KEY, value),
            None => MemoryPreferenceStore::new(),
        };
        PresentationController::mount(prefs, DocumentHead::new(), locale, 21)
    }

    // ==================== Language Resolution Tests ====================

    #[test]
    fn test_resolve_from_locale() {
        assert_eq!(resolve_language(None, Some("en-US")), Language::English);
        assert_eq!(resolve_language(None, Some("fr-FR")), Language::French);
        assert_eq!(resolve_language(None, Some("de-DE")), Language::English);
    }

    #[test]
    fn test_resolve_stored_beats_locale() {
        assert_eq!(resolve_language(Some("fr"), Some("en-US")), Language::French);
        assert_eq!(resolve_language(Some("en"), Some("fr-FR")), Language::English);
    }

    #[test]
    fn test_resolve_malformed_stored_falls_through() {
        assert_eq!(resolve_language(Some("FR"), Some("fr-FR")), Language::French);
        assert_eq!(resolve_language(Some("es"), Some("en-GB")), Language::English);
        assert_eq!(resolve_language(Some(""), Some("fr")), Language::French);
    }

    #[test]
    fn test_resolve_without_locale_uses_fallback() {
        assert_eq!(resolve_language(None, None), Language::English);
    }

    // ==================== Age Tests ====================

    #[test]
    fn test_calendar_age_boundaries() {
        let birth = date(2003, 1, 23);
        assert_eq!(calendar_age(birth, date(2024, 1, 22)), 20);
        assert_eq!(calendar_age(birth, date(2024, 1, 23)), 21);
        assert_eq!(calendar_age(birth, date(2024, 6, 1)), 21);
    }

    #[test]
    fn test_calendar_age_leap_day_birth() {
        let birth = date(2004, 2, 29);
        assert_eq!(calendar_age(birth, date(2023, 2, 28)), 18);
        assert_eq!(calendar_age(birth, date(2023, 3, 1)), 19);
        assert_eq!(calendar_age(birth, date(2024, 2, 29)), 20);
    }

    #[test]
    fn test_calendar_age_before_birth_is_zero() {
        assert_eq!(calendar_age(date(2003, 1, 23), date(2002, 12, 31)), 0);
        assert_eq!(calendar_age(date(2003, 1, 23), date(2003, 1, 23)), 0);
    }

    proptest! {
        #[test]
        fn prop_age_increments_exactly_on_birthday(
            year in 1950i32..2010,
            month in 1u32..=12,
            day in 1u32..=28,
            years_later in 1i32..80,
        ) {
            let birth = date(year, month, day);
            let birthday = date(year + years_later, month, day);
            let eve = birthday.pred_opt().unwrap();

            prop_assert_eq!(calendar_age(birth, birthday), years_later as u32);
            prop_assert_eq!(calendar_age(birth, eve), (years_later - 1) as u32);
        }

        #[test]
        fn prop_age_is_monotonic(offset_a in 0i64..40_000, offset_b in 0i64..40_000) {
            let birth = date(1960, 7, 14);
            let (lo, hi) = if offset_a <= offset_b { (offset_a, offset_b) } else { (offset_b, offset_a) };
            let a = birth + chrono::Duration::days(lo);
            let b = birth + chrono::Duration::days(hi);
            prop_assert!(calendar_age(birth, a) <= calendar_age(birth, b));
        }
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let items = for_language(Language::English).projects.items;
        let visible = filter_projects(items, ProjectFilter::All);

        let titles: Vec<_> = visible.iter().map(|p| p.title).collect();
        let expected: Vec<_> = items.iter().map(|p| p.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_filter_academic_preserves_order() {
        let items = for_language(Language::English).projects.items;
        let visible = filter_projects(items, ProjectFilter::Category(ProjectCategory::Academic));

        let titles: Vec<_> = visible.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Olympic Games — Opening Ceremony",
                "Running insights app",
                "Climbing shoes e-commerce iOS app",
            ]
        );
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let items: Vec<Project> = for_language(Language::French)
            .projects
            .items
            .iter()
            .filter(|p| p.category == ProjectCategory::Academic)
            .cloned()
            .collect();

        let visible = filter_projects(&items, ProjectFilter::Category(ProjectCategory::Personal));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_returns_views_not_copies() {
        let items = for_language(Language::English).projects.items;
        let visible = filter_projects(items, ProjectFilter::All);
        assert!(std::ptr::eq(visible[0], &items[0]));
    }

    #[test]
    fn test_filter_keys_round_trip() {
        for filter in ProjectFilter::ALL {
            assert_eq!(filter.key().parse::<ProjectFilter>(), Ok(filter));
        }
        assert_eq!(
            "archived".parse::<ProjectFilter>(),
            Err(FilterError::UnknownKey("archived".to_string()))
        );
    }

    #[test]
    fn test_filter_labels_are_localized() {
        let fr = for_language(Language::French);
        let labels: Vec<_> = ProjectFilter::ALL.iter().map(|f| f.label(fr)).collect();
        assert_eq!(labels, vec!["Tous", "Universitaires", "Personnels"]);
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(filter_index in 0usize..3, english in any::<bool>()) {
            let language = if english { Language::English } else { Language::French };
            let items = for_language(language).projects.items;
            let filter = ProjectFilter::ALL[filter_index];

            let visible = filter_projects(items, filter);
            let mut cursor = items.iter();
            for project in &visible {
                prop_assert!(filter.matches(project));
                prop_assert!(cursor.any(|p| std::ptr::eq(p, *project)));
            }
            let expected = items.iter().filter(|p| filter.matches(p)).count();
            prop_assert_eq!(visible.len(), expected);
        }
    }

    // ==================== Controller Tests ====================

    #[test]
    fn test_mount_applies_effects_for_initial_language() {
        let controller = mount(None, Some("fr-FR"));

        assert_eq!(controller.language(), Language::French);
        assert_eq!(
            controller.preferences().get(STORAGE_KEY).as_deref(),
            Some("fr")
        );
        assert_eq!(controller.document().lang, "fr");
        assert_eq!(
            controller.document().title,
            for_language(Language::French).meta.title
        );
        assert_eq!(
            controller.document().meta_description.as_deref(),
            Some(for_language(Language::French).meta.description)
        );
    }

    #[test]
    fn test_mount_prefers_stored_language() {
        let controller = mount(Some("fr"), Some("en-US"));
        assert_eq!(controller.language(), Language::French);
    }

    #[test]
    fn test_mount_starts_with_all_filter() {
        let controller = mount(None, None);
        assert_eq!(controller.state().filter, ProjectFilter::All);
        assert_eq!(controller.state().age, 21);
    }

    #[test]
    fn test_effects_are_idempotent() {
        let mut once = mount(None, Some("en-US"));
        once.set_language(Language::French);

        let mut twice = mount(None, Some("en-US"));
        twice.set_language(Language::French);
        twice.set_language(Language::French);

        assert_eq!(once.document(), twice.document());
        assert_eq!(
            once.preferences().get(STORAGE_KEY),
            twice.preferences().get(STORAGE_KEY)
        );
    }

    #[test]
    fn test_language_round_trip() {
        let mut controller = mount(None, None);
        controller.set_language(Language::English);
        controller.set_language(Language::French);
        controller.set_language(Language::English);

        let (prefs, document) = controller.into_parts();
        assert_eq!(prefs.get(STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(document.lang, "en");
    }

    #[test]
    fn test_missing_meta_description_is_not_fatal() {
        let mut controller = PresentationController::mount(
            MemoryPreferenceStore::new(),
            DocumentHead::without_meta_description(),
            Some("fr"),
            21,
        );
        controller.set_language(Language::English);

        assert_eq!(controller.document().lang, "en");
        assert_eq!(controller.document().meta_description, None);
    }

    #[test]
    fn test_visible_projects_follow_language_and_filter() {
        let mut controller = mount(Some("en"), None);
        controller.set_filter(ProjectFilter::Category(ProjectCategory::Personal));

        let titles: Vec<_> = controller.visible_projects().iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["SentiMarket"]);

        controller.set_language(Language::French);
        controller.set_filter(ProjectFilter::Category(ProjectCategory::Academic));
        let visible = controller.visible_projects();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].title, "Jeux Olympiques — Cérémonie d’ouverture");
    }

    #[test]
    fn test_every_state_pair_renders_a_view() {
        for language in Language::ALL {
            for filter in ProjectFilter::ALL {
                let mut controller = mount(None, None);
                controller.set_language(language);
                controller.set_filter(filter);

                let visible = controller.visible_projects();
                assert!(visible.iter().all(|p| filter.matches(p)));
                assert_eq!(controller.document().lang, language.code());
            }
        }
    }

    #[test]
    fn test_refresh_age() {
        let mut controller = mount(None, None);
        let age = controller.refresh_age(date(2003, 1, 23), date(2024, 1, 22));
        assert_eq!(age, 20);
        assert_eq!(controller.state().age, 20);

        // The day of the birthday moves it forward
        assert_eq!(controller.refresh_age(date(2003, 1, 23), date(2024, 1, 23)), 21);
        assert_eq!(controller.state().age, 21);
    }

    #[test]
    fn test_view_state_serializes_codes() {
        let controller = mount(Some("fr"), None);
        let json = serde_json::to_value(controller.state()).unwrap();
        assert_eq!(json["language"], "fr");
        assert_eq!(json["filter"], "all");
    }
}
