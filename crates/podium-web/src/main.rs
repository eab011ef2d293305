//! Podium Web Server
//!
//! Run with: cargo run -p podium-web

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use podium_common::AppConfig;
use podium_web::{refresh, router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::load()?;
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;

    let state = Arc::new(AppState::new(config)?);
    refresh::spawn(state.clone());

    let app = router::build_router(state);

    info!("Leaderboard dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
