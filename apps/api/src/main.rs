mod cache;
mod config;
mod content;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Every setting is optional; missing values fall back to defaults.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Astro-Baba v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone())?;
    if state.llm.is_configured() {
        info!(
            "LLM client initialized (model: {}, key: {})",
            llm_client::MODEL,
            state.llm.key_hint().unwrap_or_default()
        );
    } else {
        warn!("ANTHROPIC_API_KEY not set; serving deterministic content only");
    }
    if config.shared_secret.is_some() {
        info!("Shared-secret check enabled");
    }
    info!(cache_dir = %config.cache_dir().display(), "Daily cache ready");

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
