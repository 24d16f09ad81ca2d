//! Preview binary - renders the portfolio page without starting the server
//!
//! Usage:
//!   cargo run --bin preview                          # French page, all projects, to stdout
//!   cargo run --bin preview -- --lang en             # English page
//!   cargo run --bin preview -- --filter academic     # Only academic projects
//!   cargo run --bin preview -- --out page.html       # Write to a file
//!   cargo run --bin preview -- --export dist         # index.fr.html + index.en.html
//!
//! Reads the same environment variables as the server (PUBLIC_SPOTIFY_EMBED_URL, ...).

use anyhow::{Context, Result};
use chrono::Local;
use portfolio_site::config::Config;
use portfolio_site::controller::ProjectFilter;
use portfolio_site::i18n::{Language, TranslationValidator};
use portfolio_site::render::{export_static, render_static};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line options
struct PreviewArgs {
    language: Language,
    filter: ProjectFilter,
    out: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self {
            language: Language::primary(),
            filter: ProjectFilter::All,
            out: None,
            export_dir: None,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("Missing value for {}", arg))
            };
            match arg.as_str() {
                "--lang" => parsed.language = value()?.parse()?,
                "--filter" => parsed.filter = value()?.parse()?,
                "--out" => parsed.out = Some(PathBuf::from(value()?)),
                "--export" => parsed.export_dir = Some(PathBuf::from(value()?)),
                other => anyhow::bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let today = Local::now().date_naive();

    let report = TranslationValidator::validate_all();
    for finding in report.errors.iter().chain(&report.warnings) {
        warn!("{}", finding);
    }

    if let Some(dir) = args.export_dir {
        let written = export_static(&config, &dir, today)?;
        info!("✓ Exported {} pages to {}", written.len(), dir.display());
        return Ok(());
    }

    info!(
        "Rendering preview (lang: {}, filter: {})",
        args.language, args.filter
    );
    let html = render_static(&config, args.language, args.filter, today)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("✓ Preview written to {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
