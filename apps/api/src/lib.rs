//! # Inventory API
//!
//! HTTP/JSON server over the products table.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory API Routes                            │
//! │                                                                         │
//! │  /api/products                                                          │
//! │  ├── GET    /              list, ordered by id                          │
//! │  ├── POST   /              create                        → 201          │
//! │  ├── GET    /expired       expiry < today                               │
//! │  ├── GET    /near-expiry   today <= expiry <= today + 7                 │
//! │  ├── PUT    /{id}          replace name / quantity / expiry             │
//! │  └── DELETE /{id}          remove, echo the removed record              │
//! │                                                                         │
//! │  /health                   store liveness                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Layers: TraceLayer (request spans) · CorsLayer (any origin)      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (see [`config`]):
//! - `INVENTORY_HOST` - Bind address (default: 0.0.0.0)
//! - `INVENTORY_PORT` - HTTP port (default: 5000)
//! - `INVENTORY_DATABASE_PATH` - SQLite file (default: platform data dir)
//! - `INVENTORY_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `INVENTORY_ACQUIRE_TIMEOUT_SECS` - Pool wait (default: 30)

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use inventory_db::Database;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

/// Collection path every product route hangs off.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the full router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(PRODUCTS_PATH, routes::products::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

// =============================================================================
// Background Server
// =============================================================================

/// Handle to a server started with [`start`].
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the products collection, e.g. `http://127.0.0.1:5000/api/products`.
    pub fn products_url(&self) -> String {
        format!("http://{}{}", self.addr, PRODUCTS_PATH)
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(self) -> std::io::Result<()> {
        // A closed channel means the server already stopped
        let _ = self.shutdown_tx.send(()).await;

        match self.task.await {
            Ok(result) => result,
            Err(join_err) => Err(std::io::Error::other(join_err)),
        }
    }
}

/// Binds `addr` and serves the API on a background task.
///
/// Binding port 0 picks a free port; read it back with [`ServerHandle::addr`].
pub async fn start(db: Database, addr: SocketAddr) -> std::io::Result<ServerHandle> {
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    let router = build_router(AppState::new(db));

    info!(%addr, "Inventory API listening");

    let task = tokio::spawn(serve(listener, router, async move {
        shutdown_rx.recv().await;
        info!("Inventory API shutting down");
    }));

    Ok(ServerHandle {
        addr,
        shutdown_tx,
        task,
    })
}
