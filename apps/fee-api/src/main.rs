//! Fee API server binary.
//!
//! Loads the tariff, builds the router, and serves it until a shutdown
//! signal arrives. All request logic lives in the library crate.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use courier_fee_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting Courier Fee API server...");

    // Load configuration (env overrides on top of the default tariff)
    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        max_fee = %config.pricing.max_delivery_fee,
        free_threshold = %config.pricing.free_threshold,
        rush_day = config.pricing.rush_day,
        "Configuration loaded"
    );

    // Build the router around the immutable pricing state
    let state = AppState::new(config.pricing);
    let router = create_router(state);

    // Build server address
    let addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    // Start server
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
