//! Page view metrics.
//!
//! Process-wide counters for rendered pages and visitor interactions, exposed
//! through the `/health` endpoint.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global view metrics singleton.
pub struct ViewMetrics {
    /// Pages rendered in French
    renders_fr: AtomicUsize,

    /// Pages rendered in English
    renders_en: AtomicUsize,

    /// Explicit language switches requested by visitors
    language_changes: AtomicUsize,

    /// Project filter selections
    filter_changes: AtomicUsize,

    /// Requests to the JSON content API
    content_requests: AtomicUsize,
}

static METRICS: OnceLock<ViewMetrics> = OnceLock::new();

impl ViewMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static ViewMetrics {
        METRICS.get_or_init(|| ViewMetrics {
            renders_fr: AtomicUsize::new(0),
            renders_en: AtomicUsize::new(0),
            language_changes: AtomicUsize::new(0),
            filter_changes: AtomicUsize::new(0),
            content_requests: AtomicUsize::new(0),
        })
    }

    pub fn record_render(&self, language: Language) {
        let counter = match language {
            Language::French => &self.renders_fr,
            Language::English => &self.renders_en,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_filter_change(&self) {
        self.filter_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_content_request(&self) {
        self.content_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn renders(&self, language: Language) -> usize {
        match language {
            Language::French => self.renders_fr.load(Ordering::Relaxed),
            Language::English => self.renders_en.load(Ordering::Relaxed),
        }
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn filter_changes(&self) -> usize {
        self.filter_changes.load(Ordering::Relaxed)
    }

    pub fn content_requests(&self) -> usize {
        self.content_requests.load(Ordering::Relaxed)
    }

    /// Snapshot of all counters.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            renders_fr: self.renders(Language::French),
            renders_en: self.renders(Language::English),
            language_changes: self.language_changes(),
            filter_changes: self.filter_changes(),
            content_requests: self.content_requests(),
        }
    }
}

/// Serializable snapshot of [`ViewMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub renders_fr: usize,
    pub renders_en: usize,
    pub language_changes: usize,
    pub filter_changes: usize,
    pub content_requests: usize,
}

impl MetricsReport {
    pub fn total_renders(&self) -> usize {
        self.renders_fr + self.renders_en
    }
}
