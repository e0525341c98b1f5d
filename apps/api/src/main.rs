use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use readiness::config::Config;
use readiness::matching::catalog::Catalog;
use readiness::routes::build_router;
use readiness::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting readiness API v{}", env!("CARGO_PKG_VERSION"));

    // Load the employer catalog (file override, else the compiled-in one)
    let catalog = match &config.employer_catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load employer catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Built-in employer catalog is malformed")?,
    };
    info!("Employer catalog ready ({} employers)", catalog.len());

    let state = AppState::new(config.clone(), catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
