//! # Inventory API Server
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()          RUST_LOG or info,inventory=debug,sqlx=warn  │
//! │  2. ApiConfig::load()       defaults → inventory.toml → INVENTORY_*     │
//! │  3. Database::new()         open SQLite, run migrations                 │
//! │  4. axum::serve()           until Ctrl+C / SIGTERM                      │
//! │  5. db.close()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use inventory_api::{build_router, serve, ApiConfig, AppState};
use inventory_db::Database;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Inventory API server...");

    let config = ApiConfig::load().context("loading configuration")?;
    let db_config = config.db_config().context("resolving database path")?;
    info!(
        addr = %config.socket_addr(),
        db = %db_config.database_path.display(),
        "Configuration loaded"
    );

    let db = Database::new(db_config)
        .await
        .context("opening database")?;
    info!("Database connected and migrations applied");

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("binding {}", config.socket_addr()))?;
    info!(addr = %config.socket_addr(), "Listening");

    serve(listener, build_router(AppState::new(db.clone())), shutdown_signal())
        .await
        .context("serving HTTP")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
