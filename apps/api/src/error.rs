//! Error types for the API.
//!
//! ## Error Flow
//! ```text
//! ValidationError ──┐
//!                   ├──► ApiError ──► (status, {"error": "<message>"})
//! DbError ──────────┘
//! ```
//!
//! Internal causes are logged here and never reach the response body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inventory_core::ValidationError;
use inventory_db::DbError;
use serde_json::json;
use tracing::error;

/// Message for a product lookup that matched nothing.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Message for a create/update body missing name or quantity.
pub const NAME_AND_QUANTITY_REQUIRED: &str = "Name and quantity are required";

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failure. Carries the per-operation message shown to clients.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Maps a store error for an operation, logging anything unexpected.
    ///
    /// `context` is the client-facing 500 message for that operation.
    pub fn from_db(err: DbError, context: &'static str) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            other => {
                error!(error = %other, "{}", context);
                ApiError::Internal(context)
            }
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { .. } => {
                ApiError::BadRequest(NAME_AND_QUANTITY_REQUIRED.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::BadRequest("Invalid product id".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_404() {
        let err = ApiError::from_db(DbError::not_found("Product", 7), "unused");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), PRODUCT_NOT_FOUND);
    }

    #[test]
    fn test_db_failure_is_opaque() {
        let err = ApiError::from_db(
            DbError::QueryFailed("disk I/O error".to_string()),
            "Server error fetching products",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error fetching products");
    }

    #[test]
    fn test_constraint_violation_is_opaque() {
        let err = ApiError::from_db(
            DbError::ConstraintViolation {
                message: "CHECK constraint failed: quantity >= 0".to_string(),
            },
            "Server error while inserting product",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error while inserting product");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ApiError::from(ValidationError::required("quantity"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), NAME_AND_QUANTITY_REQUIRED);

        let err = ApiError::from(ValidationError::Negative {
            field: "quantity".to_string(),
        });
        assert_eq!(err.to_string(), "quantity must not be negative");
    }
}
