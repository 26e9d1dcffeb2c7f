//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD over the `products` table
//! - Expired / near-expiry views filtered in SQL
//!
//! ## Expiry Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Expiry Classification (today = T)                    │
//! │                                                                         │
//! │        expired              near-expiry                                 │
//! │   ◄──────────────┤├───────────────────────────┤                         │
//! │   expiry_date < T   T <= expiry_date <= T + 7                           │
//! │                                                                         │
//! │   NULL expiry_date never appears in either view.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `today` is passed in by the caller rather than read from the clock here,
//! so the boundaries are testable.

use chrono::NaiveDate;
use inventory_core::expiry::near_expiry_window;
use inventory_core::{Product, ProductInput};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const PRODUCT_COLUMNS: &str = "id, name, quantity, expiry_date";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let created = repo.create(&input).await?;
/// let expired = repo.list_expired(inventory_core::expiry::today()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product ordered by ascending id.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(product))` - Product found
    /// * `Ok(None)` - No product with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its assigned id.
    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        let sql = format!(
            "INSERT INTO products (name, quantity, expiry_date) \
             VALUES (?1, ?2, ?3) RETURNING {PRODUCT_COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.expiry_date)
            .fetch_one(&self.pool)
            .await?;

        debug!(id = product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// Replaces name, quantity and expiry date of an existing product.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No product with that id
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        let sql = format!(
            "UPDATE products SET name = ?1, quantity = ?2, expiry_date = ?3 \
             WHERE id = ?4 RETURNING {PRODUCT_COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.expiry_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))?;

        debug!(id = product.id, "Updated product");
        Ok(product)
    }

    /// Deletes a product and returns the removed record.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No product with that id
    pub async fn delete(&self, id: i64) -> DbResult<Product> {
        let sql = format!("DELETE FROM products WHERE id = ?1 RETURNING {PRODUCT_COLUMNS}");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))?;

        debug!(id = product.id, "Deleted product");
        Ok(product)
    }

    /// Lists products whose expiry date is strictly before `today`,
    /// soonest first.
    pub async fn list_expired(&self, today: NaiveDate) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE expiry_date IS NOT NULL AND expiry_date < ?1 \
             ORDER BY expiry_date ASC, id ASC"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(today)
            .fetch_all(&self.pool)
            .await?;

        debug!(%today, count = products.len(), "Listed expired products");
        Ok(products)
    }

    /// Lists products expiring within `[today, today + 7 days]`, soonest first.
    pub async fn list_near_expiry(&self, today: NaiveDate) -> DbResult<Vec<Product>> {
        let (start, end) = near_expiry_window(today);
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE expiry_date IS NOT NULL AND expiry_date >= ?1 AND expiry_date <= ?2 \
             ORDER BY expiry_date ASC, id ASC"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        debug!(%today, count = products.len(), "Listed near-expiry products");
        Ok(products)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
