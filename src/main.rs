/// Main application entry point with clean architecture
mod config;
mod domain;
mod errors;
mod handlers;
mod orbit;
mod routes;
mod services;
mod utils;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::{build_router, cors_layer};
use crate::services::EclipseService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize services
    let eclipse_service = Arc::new(EclipseService::new());

    // Initialize application state
    let state = AppState { eclipse_service };

    // Build router
    let app = build_router(state).layer(cors_layer(&config.cors_origins));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("orbit_eclipse service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
