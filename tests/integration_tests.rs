//! Integration tests for the portfolio site
//!
//! These tests start the real router on an ephemeral port and drive it over
//! HTTP, the way a browser would: cookies, Accept-Language and query links.

use portfolio_site::config::Config;
use portfolio_site::i18n::{for_language, Language};
use portfolio_site::preferences::{parse_cookie, STORAGE_KEY};
use portfolio_site::scheduler::AgeCell;
use portfolio_site::server::{router, AppState};
use reqwest::header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE};
use reqwest::Response;

// ==================== Test Helpers ====================

/// Start the app on 127.0.0.1:0 and return its base URL
async fn spawn_app(config: Config, age: u32) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("local addr");

    let app = router(AppState::new(config, AgeCell::new(age)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{}", address)
}

async fn get(url: &str, headers: &[(&str, &str)]) -> Response {
    let client = reqwest::Client::new();
    let mut request = client.get(url);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    request.send().await.expect("request failed")
}

/// Value of the language preference cookie set by the response, if any
fn preference_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| parse_cookie(v, STORAGE_KEY).map(str::to_string))
}

fn cookie_header(language: &str) -> String {
    format!("{}={}", STORAGE_KEY, language)
}

// ==================== Language Resolution ====================

#[tokio::test]
async fn test_locale_french_without_cookie() {
    let base = spawn_app(Config::default(), 21).await;

    let response = get(&base, &[(ACCEPT_LANGUAGE.as_str(), "fr-FR,fr;q=0.9")]).await;
    assert_eq!(response.status(), 200);
    // Initial resolution is persisted too
    assert_eq!(preference_cookie(&response).as_deref(), Some("fr"));

    let body = response.text().await.unwrap();
    assert!(body.contains("<html lang=\"fr\">"));
    assert!(body.contains("Bonjour, je suis"));
}

#[tokio::test]
async fn test_locale_english_and_unsupported_fall_back() {
    let base = spawn_app(Config::default(), 21).await;

    for locale in ["en-US", "de-DE"] {
        let response = get(&base, &[(ACCEPT_LANGUAGE.as_str(), locale)]).await;
        assert_eq!(preference_cookie(&response).as_deref(), Some("en"));
        let body = response.text().await.unwrap();
        assert!(body.contains("<html lang=\"en\">"), "locale {}", locale);
    }
}

#[tokio::test]
async fn test_cookie_beats_locale() {
    let base = spawn_app(Config::default(), 21).await;

    let response = get(
        &base,
        &[
            (COOKIE.as_str(), cookie_header("fr").as_str()),
            (ACCEPT_LANGUAGE.as_str(), "en-US"),
        ],
    )
    .await;

    // Same value as the browser already holds: nothing to write back
    assert_eq!(preference_cookie(&response), None);
    let body = response.text().await.unwrap();
    assert!(body.contains("<html lang=\"fr\">"));
}

#[tokio::test]
async fn test_malformed_cookie_is_ignored() {
    let base = spawn_app(Config::default(), 21).await;

    let response = get(
        &base,
        &[
            (COOKIE.as_str(), cookie_header("klingon").as_str()),
            (ACCEPT_LANGUAGE.as_str(), "fr-CA"),
        ],
    )
    .await;

    assert_eq!(response.status(), 200);
    assert_eq!(preference_cookie(&response).as_deref(), Some("fr"));
}

// ==================== Language Switching ====================

#[tokio::test]
async fn test_language_switch_round_trip() {
    let base = spawn_app(Config::default(), 21).await;
    let mut cookie = cookie_header("en");

    for (target, expected_cookie) in [("en", None), ("fr", Some("fr")), ("en", Some("en"))] {
        let response = get(
            &format!("{}/?lang={}", base, target),
            &[(COOKIE.as_str(), cookie.as_str())],
        )
        .await;

        assert_eq!(preference_cookie(&response).as_deref(), expected_cookie);
        if let Some(value) = preference_cookie(&response) {
            cookie = cookie_header(&value);
        }

        let body = response.text().await.unwrap();
        assert!(body.contains(&format!("<html lang=\"{}\">", target)));
    }

    assert_eq!(cookie, cookie_header("en"));
}

#[tokio::test]
async fn test_unknown_lang_parameter_is_ignored() {
    let base = spawn_app(Config::default(), 21).await;

    let response = get(
        &format!("{}/?lang=de", base),
        &[(COOKIE.as_str(), cookie_header("fr").as_str())],
    )
    .await;

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<html lang=\"fr\">"));
}

// ==================== Filtering & Rendering ====================

#[tokio::test]
async fn test_filter_parameter_limits_projects() {
    let base = spawn_app(Config::default(), 21).await;

    let body = get(
        &format!("{}/?lang=en&filter=academic", base),
        &[],
    )
    .await
    .text()
    .await
    .unwrap();

    let academic = for_language(Language::English)
        .projects
        .items
        .iter()
        .filter(|p| p.category.key() == "academic")
        .count();
    assert_eq!(body.matches("class=\"project-card\"").count(), academic);
    assert!(!body.contains("<h3>SentiMarket</h3>"));
}

#[tokio::test]
async fn test_unknown_filter_shows_all_projects() {
    let base = spawn_app(Config::default(), 21).await;

    let body = get(&format!("{}/?lang=en&filter=secret", base), &[])
        .await
        .text()
        .await
        .unwrap();

    let total = for_language(Language::English).projects.items.len();
    assert_eq!(body.matches("class=\"project-card\"").count(), total);
}

#[tokio::test]
async fn test_age_comes_from_shared_cell() {
    let base = spawn_app(Config::default(), 33).await;

    let body = get(&format!("{}/?lang=en", base), &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("33-year-old"));
}

#[tokio::test]
async fn test_spotify_section_follows_config() {
    let without = spawn_app(Config::default(), 21).await;
    let body = get(&without, &[]).await.text().await.unwrap();
    assert!(!body.contains("id=\"spotify\""));

    let config = Config {
        spotify_embed_url: Some("https://open.spotify.com/embed/playlist/abc".to_string()),
        ..Config::default()
    };
    let with = spawn_app(config, 21).await;
    let body = get(&with, &[]).await.text().await.unwrap();
    assert!(body.contains("id=\"spotify\""));
    assert!(body.contains("playlist/abc?utm_source=generator"));
}

// ==================== JSON API ====================

#[tokio::test]
async fn test_content_api() {
    let base = spawn_app(Config::default(), 21).await;

    let response = get(&format!("{}/api/content/fr", base), &[]).await;
    assert_eq!(response.status(), 200);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["nav"]["about"], "À propos");
    assert_eq!(json["projects"]["filter_all"], "Tous");

    let response = get(&format!("{}/api/content/de", base), &[]).await;
    assert_eq!(response.status(), 404);
    let json: serde_json::Value = response.json().await.unwrap();
    assert!(json["error"].as_str().unwrap().contains("de"));
}

#[tokio::test]
async fn test_health_reports_age_and_metrics() {
    let base = spawn_app(Config::default(), 27).await;

    // Render at least one page so the counters move
    get(&format!("{}/?lang=fr", base), &[]).await;

    let json: serde_json::Value = get(&format!("{}/health", base), &[])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["age"], 27);
    assert!(json["metrics"]["renders_fr"].as_u64().unwrap() >= 1);
    assert!(json["renders"].as_u64().unwrap() >= json["metrics"]["renders_fr"].as_u64().unwrap());
}
