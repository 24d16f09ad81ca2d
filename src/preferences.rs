//! Persisted visitor preferences.
//!
//! The page keeps exactly one persisted value: the chosen language, stored
//! under [`STORAGE_KEY`]. On the web it lives in a cookie; tests and the
//! preview binary use the in-memory store.

use axum::http::{header, HeaderMap};
use std::collections::HashMap;

/// Key the language preference is persisted under
pub const STORAGE_KEY: &str = "thomas-portfolio-language";

/// Lifetime of the preference cookie (one year)
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Synchronous key-value storage local to one visitor.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Plain in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by the request's `Cookie` header.
///
/// Writes that change a value are queued and turned into `Set-Cookie`
/// headers for the response. Writing the value the browser already sent is a
/// no-op, so re-applying the same language never produces a header.
#[derive(Debug, Clone, Default)]
pub struct CookiePreferences {
    incoming: HashMap<String, String>,
    pending: Vec<(String, String)>,
}

impl CookiePreferences {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(parse_cookie_pairs)
            .collect();

        Self {
            incoming,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` header values for every changed entry, in write order.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|(key, value)| set_cookie_header(key, value))
            .collect()
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.pending
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .or_else(|| self.incoming.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.pending.retain(|(k, _)| k != key);
        if self.incoming.get(key).map(String::as_str) != Some(value) {
            self.pending.push((key.to_string(), value.to_string()));
        }
    }
}

/// Split a `Cookie` header into name/value pairs.
fn parse_cookie_pairs(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

/// Look up one cookie by name in a raw `Cookie` header.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| k.trim() == name)
        .map(|(_, v)| v.trim())
}

fn set_cookie_header(key: &str, value: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        key, value, COOKIE_MAX_AGE_SECS
    )
}
