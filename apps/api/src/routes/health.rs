//! Health check endpoint.
//!
//! `GET /health` answers 200 while the store executes `SELECT 1`, 503
//! otherwise. Load balancers and the dashboard's startup probe use it.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::warn;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.db.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        warn!("Health check failed: database unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use inventory_db::{Database, DbConfig};
    use tower::ServiceExt;

    use super::*;
    use crate::build_router;

    async fn get_health(db: Database) -> (StatusCode, Value) {
        let response = build_router(AppState::new(db))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_healthy_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let (status, body) = get_health(db).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        let (status, body) = get_health(db).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }
}
