//! Bilingual single-page portfolio.
//!
//! The page content lives in the static [`i18n`] store. A
//! [`controller::PresentationController`] resolves the visitor's language,
//! derives the view state and writes document metadata through
//! [`document::DocumentEffects`]. [`render`] turns that state into HTML and
//! [`server`] exposes it over HTTP.

pub mod config;
pub mod controller;
pub mod document;
pub mod i18n;
pub mod metrics;
pub mod preferences;
pub mod render;
pub mod scheduler;
pub mod server;
