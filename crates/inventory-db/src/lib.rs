//! # inventory-db: Database Layer for the Inventory Tracker
//!
//! This crate provides database access for the inventory tracker.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Tracker Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /api/products)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   inventory-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_initial_ │  │   │
//! │  │   │ Connection    │    │               │    │   schema.sql │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/inventory-tracker/inventory.db (Linux)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/inventory.db")).await?;
//!
//! // Use repositories
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
