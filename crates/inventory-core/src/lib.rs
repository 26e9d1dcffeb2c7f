//! # inventory-core: Pure Domain Logic for the Inventory Tracker
//!
//! This crate holds every rule of the inventory tracker that can be expressed
//! without touching a database or a socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Tracker Architecture                      │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │  inventory-client        │  HTTP  │  apps/api (axum)             │  │
//! │  │  list view / form view   │───────►│  /api/products handlers      │  │
//! │  └────────────┬─────────────┘        └──────────────┬───────────────┘  │
//! │               │                                     │                  │
//! │               │                      ┌──────────────▼───────────────┐  │
//! │               │                      │  inventory-db (SQLite)       │  │
//! │               │                      └──────────────┬───────────────┘  │
//! │               │                                     │                  │
//! │  ┌────────────▼─────────────────────────────────────▼───────────────┐  │
//! │  │               ★ inventory-core (THIS CRATE) ★                    │  │
//! │  │                                                                  │  │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌────────────┐  │  │
//! │  │   │   types   │  │ validation │  │  expiry   │  │  listing   │  │  │
//! │  │   │  Product  │  │  name/qty  │  │  windows  │  │ sort/filter│  │  │
//! │  │   │  View     │  │  dates     │  │  badges   │  │  paginate  │  │  │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └────────────┘  │  │
//! │  │                                                                  │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductInput, ProductView)
//! - [`error`] - Validation error types
//! - [`validation`] - Presence and format rules for product input
//! - [`expiry`] - "Today", expiry windows and the low-stock flag
//! - [`listing`] - The sort → filter → paginate pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use inventory_core::expiry::ExpiryStatus;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 1, 15);
//!
//! assert_eq!(ExpiryStatus::classify(expiry, today), ExpiryStatus::NearExpiry);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod expiry;
pub mod listing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use expiry::ExpiryStatus;
pub use listing::{ListQuery, ProductPage, SortField, SortOrder, SortState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of rows shown per page in the product list.
pub const PAGE_SIZE: usize = 10;

/// Products with fewer units than this are flagged as low stock.
///
/// ## Business Reason
/// Presentation-only flag. The store attaches no meaning to it.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Length of the near-expiry window in days (inclusive on both ends).
pub const NEAR_EXPIRY_DAYS: u64 = 7;
