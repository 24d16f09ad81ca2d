use anyhow::{Context, Result};
use portfolio_site::config::Config;
use portfolio_site::i18n::TranslationValidator;
use portfolio_site::scheduler::{AgeCell, AgeRefresher};
use portfolio_site::server::{self, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio site");

    let config = Config::from_env()?;

    let report = TranslationValidator::validate_all();
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }
    if report.is_clean() {
        info!("✓ Translations validated");
    }

    if config.spotify_embed_url.is_none() {
        info!("PUBLIC_SPOTIFY_EMBED_URL not set, Spotify section disabled");
    }

    let age = AgeCell::default();
    let refresher = AgeRefresher::start(config.profile.birth_date, age.clone()).await?;

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("✓ Listening on http://{}", address);

    let app = server::router(AppState::new(config, age));
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Stop the refresher even when the server failed
    let stopped = refresher.shutdown().await;
    shutdown_outcome(served, stopped)?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Combine the server and refresher results, logging both failures.
///
/// The server error wins since it is the one that ended the process.
fn shutdown_outcome(served: std::io::Result<()>, stopped: Result<()>) -> Result<()> {
    match (served, stopped) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) => Err(e).context("Server error"),
        (Ok(()), Err(e)) => Err(e.context("Failed to stop age refresher")),
        (Err(server), Err(refresher)) => {
            error!("Failed to stop age refresher: {:#}", refresher);
            Err(server).context("Server error")
        }
    }
}
