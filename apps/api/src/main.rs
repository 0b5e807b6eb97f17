mod assembly;
mod config;
mod dates;
mod errors;
mod filters;
mod models;
mod preset;
mod render;
mod routes;
mod sections;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::GotenbergBackend;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::ProfileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    let store = ProfileStore::new(
        config.profile_dir.clone(),
        config.presets_dir.clone(),
        config.templates_dir.clone(),
    );

    // Validate the profile at startup so a broken profile.json fails fast;
    // requests re-read it from disk afterwards.
    let profile = store.load_profile()?;
    info!(
        "Profile loaded for {}",
        profile.basic_info.name.as_deref().unwrap_or("(unnamed)")
    );

    let pdf = Arc::new(GotenbergBackend::new(config.converter_url.clone()));
    info!("PDF converter backend: {}", config.converter_url);

    let state = AppState { store, pdf };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
