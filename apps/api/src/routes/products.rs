//! Product handlers, mounted under `/api/products`.
//!
//! Each handler runs one store call. Store failures are reported with a
//! fixed per-operation message; the cause only goes to the log.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use inventory_core::expiry::today;
use inventory_core::validation::ProductDraft;
use inventory_core::{DeletedProduct, Product};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

const FETCH_FAILED: &str = "Server error fetching products";
const INSERT_FAILED: &str = "Server error while inserting product";
const UPDATE_FAILED: &str = "Server error while updating product";
const DELETE_FAILED: &str = "Server error while deleting product";
const EXPIRED_FAILED: &str = "Server error fetching expired products";
const NEAR_EXPIRY_FAILED: &str = "Server error fetching near-expiry products";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/expired", get(list_expired))
        .route("/near-expiry", get(list_near_expiry))
        .route("/{id}", put(update_product).delete(delete_product))
}

async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .db
        .products()
        .list()
        .await
        .map_err(|e| ApiError::from_db(e, FETCH_FAILED))?;

    Ok(Json(products))
}

async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(draft) = body?;
    let input = draft.validate()?;

    let product = state
        .db
        .products()
        .create(&input)
        .await
        .map_err(|e| ApiError::from_db(e, INSERT_FAILED))?;

    info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(draft) = body?;
    let input = draft.validate()?;

    let product = state
        .db
        .products()
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_db(e, UPDATE_FAILED))?;

    info!(id, "Product updated");
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedProduct>> {
    let Path(id) = id?;

    let product = state
        .db
        .products()
        .delete(id)
        .await
        .map_err(|e| ApiError::from_db(e, DELETE_FAILED))?;

    info!(id, "Product deleted");
    Ok(Json(DeletedProduct::new(product)))
}

async fn list_expired(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let today = today();
    let products = state
        .db
        .products()
        .list_expired(today)
        .await
        .map_err(|e| ApiError::from_db(e, EXPIRED_FAILED))?;

    debug!(%today, count = products.len(), "Expired products");
    Ok(Json(products))
}

async fn list_near_expiry(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let today = today();
    let products = state
        .db
        .products()
        .list_near_expiry(today)
        .await
        .map_err(|e| ApiError::from_db(e, NEAR_EXPIRY_FAILED))?;

    debug!(%today, count = products.len(), "Near-expiry products");
    Ok(Json(products))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::{Days, NaiveDate};
    use http_body_util::BodyExt;
    use inventory_db::{Database, DbConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::build_router;

    struct TestApp {
        db: Database,
    }

    impl TestApp {
        async fn new() -> Self {
            TestApp {
                db: Database::new(DbConfig::in_memory()).await.unwrap(),
            }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let mut request = Request::builder().method(method).uri(uri);
            let body = match body {
                Some(json) => {
                    request = request.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            let response = build_router(AppState::new(self.db.clone()))
                .oneshot(request.body(body).unwrap())
                .await
                .unwrap();

            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }

        async fn create(&self, body: Value) -> (StatusCode, Value) {
            self.send(Method::POST, "/api/products", Some(body)).await
        }
    }

    fn offset(days: i64) -> String {
        let today = today();
        let date: NaiveDate = if days >= 0 {
            today.checked_add_days(Days::new(days as u64)).unwrap()
        } else {
            today.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
        };
        date.format("%Y-%m-%d").to_string()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = TestApp::new().await;

        let (status, created) = app
            .create(json!({"name": "Milk Powder", "quantity": 20, "expiry_date": "2025-01-01"}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_i64().is_some());
        assert_eq!(created["name"], "Milk Powder");
        assert_eq!(created["expiry_date"], "2025-01-01");

        let (status, list) = app.send(Method::GET, "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], created);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let app = TestApp::new().await;
        for name in ["Zebra Cakes", "Apples", "Milk"] {
            app.create(json!({"name": name, "quantity": 1})).await;
        }

        let (_, list) = app.send(Method::GET, "/api/products", None).await;
        let ids: Vec<i64> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_create_requires_name_and_quantity() {
        let app = TestApp::new().await;

        for body in [
            json!({"quantity": 3}),
            json!({"name": "   ", "quantity": 3}),
            json!({"name": "Bread"}),
        ] {
            let (status, error) = app.create(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error["error"], "Name and quantity are required");
        }

        let (_, list) = app.send(Method::GET, "/api/products", None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let app = TestApp::new().await;

        let (status, _) = app.create(json!({"name": "Eggs", "quantity": -2})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .create(json!({"name": "Eggs", "quantity": 2, "expiry_date": "next week"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, error) = app.create(json!({"name": "Eggs", "quantity": "lots"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_accepts_long_name() {
        let app = TestApp::new().await;
        let name = "A".repeat(201);

        let (status, created) = app.create(json!({"name": name, "quantity": 3})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], name.as_str());
    }

    #[tokio::test]
    async fn test_empty_expiry_means_none() {
        let app = TestApp::new().await;

        let (status, created) = app
            .create(json!({"name": "Bread", "quantity": 3, "expiry_date": ""}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["expiry_date"].is_null());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let app = TestApp::new().await;
        let (_, created) = app
            .create(json!({"name": "Yogurt", "quantity": 4, "expiry_date": "2030-05-01"}))
            .await;
        let uri = format!("/api/products/{}", created["id"]);

        let (status, updated) = app
            .send(
                Method::PUT,
                &uri,
                Some(json!({"name": "Greek Yogurt", "quantity": 9, "expiry_date": null})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["name"], "Greek Yogurt");
        assert_eq!(updated["quantity"], 9);
        assert!(updated["expiry_date"].is_null());
    }

    #[tokio::test]
    async fn test_update_errors() {
        let app = TestApp::new().await;
        let (_, created) = app.create(json!({"name": "Tea", "quantity": 8})).await;
        let uri = format!("/api/products/{}", created["id"]);

        let (status, error) = app
            .send(Method::PUT, &uri, Some(json!({"name": "", "quantity": 8})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "Name and quantity are required");

        let (status, error) = app
            .send(
                Method::PUT,
                "/api/products/4242",
                Some(json!({"name": "Ghost", "quantity": 1})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["error"], "Product not found");

        let (status, _) = app
            .send(
                Method::PUT,
                "/api/products/abc",
                Some(json!({"name": "Ghost", "quantity": 1})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // Rejected update left the row untouched
        let (_, list) = app.send(Method::GET, "/api/products", None).await;
        assert_eq!(list[0]["name"], "Tea");
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let app = TestApp::new().await;
        let (_, created) = app.create(json!({"name": "Cheese", "quantity": 2})).await;
        let uri = format!("/api/products/{}", created["id"]);

        let (status, body) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Product deleted successfully");
        assert_eq!(body["product"], created);

        let (status, body) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_expiry_views() {
        let app = TestApp::new().await;
        app.create(json!({"name": "Bread", "quantity": 3})).await;
        app.create(json!({"name": "Old Milk", "quantity": 6, "expiry_date": offset(-1)}))
            .await;
        app.create(json!({"name": "Eggs", "quantity": 12, "expiry_date": offset(7)}))
            .await;
        app.create(json!({"name": "Cheese", "quantity": 2, "expiry_date": offset(0)}))
            .await;
        app.create(json!({"name": "Rice", "quantity": 40, "expiry_date": offset(8)}))
            .await;

        let names = |list: Value| -> Vec<String> {
            list.as_array()
                .unwrap()
                .iter()
                .map(|p| p["name"].as_str().unwrap().to_string())
                .collect()
        };

        let (status, expired) = app.send(Method::GET, "/api/products/expired", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(expired), vec!["Old Milk"]);

        let (status, near) = app
            .send(Method::GET, "/api/products/near-expiry", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(near), vec!["Cheese", "Eggs"]);
    }

    #[tokio::test]
    async fn test_store_failure_is_reported_opaquely() {
        let app = TestApp::new().await;
        app.db.close().await;

        let (status, body) = app.send(Method::GET, "/api/products", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error fetching products");

        let (status, body) = app.create(json!({"name": "Tea", "quantity": 1})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error while inserting product");
    }
}
