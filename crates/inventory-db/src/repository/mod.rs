//! # Repository Module
//!
//! Database repository implementations for the inventory tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().list_expired(today)                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list / get_by_id / count                                          │
//! │  ├── create / update / delete                                          │
//! │  └── list_expired / list_near_expiry                                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and expiry views

pub mod product;
