use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Image shown when no profile picture is configured
pub const PLACEHOLDER_PROFILE_IMAGE: &str = "/profile-placeholder.svg";

/// An outbound social link, rendered verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Static identity of the site owner
#[derive(Debug, Clone, Serialize)]
pub struct SiteProfile {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_url: String,
    pub profile_image: String,
    pub og_image: String,
    /// Ordered, not deduplicated
    pub socials: Vec<SocialLink>,
}

impl SiteProfile {
    /// Profile image path, or the placeholder when none is set.
    pub fn profile_image_or_placeholder(&self) -> &str {
        if self.profile_image.trim().is_empty() {
            PLACEHOLDER_PROFILE_IMAGE
        } else {
            &self.profile_image
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Two-letter monogram used as the navigation logo ("TC").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            name: "Thomas Chevalier".to_string(),
            email: "thomchevalier49@gmail.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2003, 1, 23).unwrap_or_default(),
            base_url: "https://thomas-chevalier.dev".to_string(),
            profile_image: "/thomas.jpeg".to_string(),
            og_image: "/og-image.svg".to_string(),
            socials: vec![
                SocialLink::new("LinkedIn", "https://www.linkedin.com/in/thomchev/"),
                SocialLink::new("GitHub", "https://github.com/chevalierthomas"),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Content
    pub profile: SiteProfile,

    /// Spotify embed URL; `None` hides the section
    pub spotify_embed_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut profile = SiteProfile::default();

        if let Ok(base_url) = std::env::var("SITE_BASE_URL") {
            profile.base_url = base_url;
        }
        if let Ok(image) = std::env::var("PROFILE_IMAGE") {
            profile.profile_image = image;
        }
        if let Ok(email) = std::env::var("CONTACT_EMAIL") {
            profile.email = email;
        }
        if let Ok(birth_date) = std::env::var("BIRTH_DATE") {
            profile.birth_date = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d")
                .with_context(|| format!("BIRTH_DATE must be YYYY-MM-DD, got '{}'", birth_date))?;
        }

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            profile,

            // An empty value is the same as an unset one
            spotify_embed_url: std::env::var("PUBLIC_SPOTIFY_EMBED_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            profile: SiteProfile::default(),
            spotify_embed_url: None,
        }
    }
}
