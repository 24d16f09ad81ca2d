//! HTML rendering of the portfolio page.
//!
//! The page is an askama template (`templates/page.html` plus one partial per
//! section) filled from a [`PageView`]. Askama escapes every interpolated
//! value; URLs from the site profile are rendered verbatim apart from that.

use crate::config::{Config, SiteProfile};
use crate::controller::{calendar_age, PresentationController, ProjectFilter, ViewState};
use crate::document::DocumentHead;
use crate::i18n::{Language, Project, Translation};
use crate::preferences::{MemoryPreferenceStore, PreferenceStore, STORAGE_KEY};
use anyhow::{Context, Result};
use askama::Template;
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

/// Query parameter appended to the Spotify embed URL
const SPOTIFY_UTM: &str = "utm_source=generator";

/// Everything needed to render one page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageView<'a> {
    pub state: &'a ViewState,
    pub head: &'a DocumentHead,
    pub translation: &'static Translation,
    pub projects: Vec<&'static Project>,
    pub profile: &'a SiteProfile,
    /// Omitted section when `None`
    pub spotify_embed_url: Option<&'a str>,
    /// Year shown in the footer copyright line
    pub year: i32,
}

/// One button of the language toggle or the filter bar.
struct ToggleLink {
    label: String,
    href: String,
    active: bool,
}

/// `<link rel="alternate" hreflang>` entry.
struct Alternate {
    code: &'static str,
    href: String,
}

impl<'a> PageView<'a> {
    fn language_links(&self) -> Vec<ToggleLink> {
        Language::ALL
            .into_iter()
            .map(|language| ToggleLink {
                label: language.code().to_uppercase(),
                href: language_href(language, self.state.filter),
                active: language == self.state.language,
            })
            .collect()
    }

    fn filter_tabs(&self) -> Vec<ToggleLink> {
        ProjectFilter::ALL
            .into_iter()
            .map(|filter| ToggleLink {
                label: filter.label(self.translation).to_string(),
                href: filter_href(filter),
                active: filter == self.state.filter,
            })
            .collect()
    }

    fn alternates(&self) -> Vec<Alternate> {
        Language::ALL
            .into_iter()
            .map(|language| Alternate {
                code: language.code(),
                href: format!("{}/?lang={}", self.site_root(), language.code()),
            })
            .collect()
    }

    fn site_root(&self) -> &str {
        self.profile.base_url.trim_end_matches('/')
    }

    fn hero_subtitle(&self) -> String {
        self.translation.hero_subtitle(self.state.age)
    }

    fn spotify_src(&self) -> Option<String> {
        self.spotify_embed_url.map(spotify_src)
    }
}

impl<P: PreferenceStore> PresentationController<P, DocumentHead> {
    /// Assemble the view for the current state.
    pub fn page_view<'a>(
        &'a self,
        profile: &'a SiteProfile,
        spotify_embed_url: Option<&'a str>,
        year: i32,
    ) -> PageView<'a> {
        PageView {
            state: self.state(),
            head: self.document(),
            translation: self.translation(),
            projects: self.visible_projects(),
            profile,
            spotify_embed_url: spotify_embed_url.filter(|url| !url.trim().is_empty()),
            year,
        }
    }
}

/// Embed URL with the generator query parameter appended.
pub fn spotify_src(embed_url: &str) -> String {
    let separator = if embed_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", embed_url, separator, SPOTIFY_UTM)
}

/// Link that switches language while keeping the active filter.
fn language_href(language: Language, filter: ProjectFilter) -> String {
    match filter {
        ProjectFilter::All => format!("?lang={}", language.code()),
        other => format!("?lang={}&filter={}", language.code(), other.key()),
    }
}

fn filter_href(filter: ProjectFilter) -> String {
    format!("?filter={}#projects", filter.key())
}

/// Render the complete HTML document.
pub fn render_page(view: &PageView) -> askama::Result<String> {
    view.render()
}

/// Render the page for a fixed language and filter, outside of any request.
pub fn render_static(
    config: &Config,
    language: Language,
    filter: ProjectFilter,
    today: NaiveDate,
) -> Result<String> {
    let mut controller = PresentationController::mount(
        MemoryPreferenceStore::with_value(STORAGE_KEY, language.code()),
        DocumentHead::new(),
        None,
        calendar_age(config.profile.birth_date, today),
    );
    controller.set_filter(filter);

    render_page(&controller.page_view(
        &config.profile,
        config.spotify_embed_url.as_deref(),
        today.year(),
    ))
    .with_context(|| format!("Failed to render the {} page", language))
}

/// Write one `index.<code>.html` per language into `dir`.
pub fn export_static(config: &Config, dir: &Path, today: NaiveDate) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for language in Language::ALL {
        let path = dir.join(format!("index.{}.html", language.code()));
        let html = render_static(config, language, ProjectFilter::All, today)?;
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Exported {}", path.display());
        written.push(path);
    }

    Ok(written)
}
