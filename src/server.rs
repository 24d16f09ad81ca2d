//! HTTP surface of the portfolio.
//!
//! - `GET /` renders the page. `?lang=` is an explicit language switch,
//!   `?filter=` selects the project filter.
//! - `GET /api/content/:lang` returns a translation as JSON.
//! - `GET /health` reports liveness, the current age and view metrics.

use crate::config::Config;
use crate::controller::{PresentationController, ProjectFilter};
use crate::document::DocumentHead;
use crate::i18n::{for_language, Language, LanguageError};
use crate::metrics::ViewMetrics;
use crate::preferences::CookiePreferences;
use crate::scheduler::AgeCell;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use askama::Template;
use chrono::{Datelike, Local};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub age: AgeCell,
}

impl AppState {
    pub fn new(config: Config, age: AgeCell) -> Self {
        Self {
            config: Arc::new(config),
            age,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub filter: Option<String>,
}

/// Errors returned by the JSON API.
#[derive(Debug)]
pub enum ApiError {
    UnknownLanguage(LanguageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnknownLanguage(e) => (StatusCode::NOT_FOUND, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Response wrapper rendering an askama template as HTML.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("Failed to render template: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/content/:lang", get(content_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Primary tag of an `Accept-Language` header ("fr-FR,fr;q=0.9" -> "fr-FR").
pub fn primary_locale(accept_language: &str) -> Option<&str> {
    accept_language
        .split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
}

async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(primary_locale);

    let mut controller = PresentationController::mount(
        CookiePreferences::from_headers(&headers),
        DocumentHead::new(),
        locale,
        state.age.get(),
    );

    // Unsupported values are ignored rather than rejected
    if let Some(code) = query.lang.as_deref() {
        match code.parse::<Language>() {
            Ok(language) => controller.set_language(language),
            Err(e) => debug!("Ignoring lang parameter: {}", e),
        }
    }
    if let Some(key) = query.filter.as_deref() {
        match key.parse::<ProjectFilter>() {
            Ok(filter) => controller.set_filter(filter),
            Err(e) => debug!("Ignoring filter parameter: {}", e),
        }
    }

    let config = &state.config;
    let view = controller.page_view(
        &config.profile,
        config.spotify_embed_url.as_deref(),
        Local::now().year(),
    );
    let mut response = HtmlTemplate(view).into_response();
    ViewMetrics::global().record_render(controller.language());

    for cookie in controller.preferences().set_cookie_headers() {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Skipping invalid Set-Cookie value: {}", e),
        }
    }
    response
}

async fn content_handler(Path(lang): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let language = lang.parse::<Language>().map_err(ApiError::UnknownLanguage)?;
    ViewMetrics::global().record_content_request();
    Ok(Json(for_language(language)))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = ViewMetrics::global().report();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "age": state.age.get(),
        "renders": metrics.total_renders(),
        "metrics": metrics,
    }))
}
