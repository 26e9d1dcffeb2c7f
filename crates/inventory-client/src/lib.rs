//! # inventory-client: Dashboard Logic
//!
//! HTTP client, view state and text rendering for the inventory dashboard.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  apps/dashboard (stdin commands)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 inventory-client (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   Dashboard ──► ProductFormView ─┐                             │   │
//! │  │       │                          ├──► ProductClient (reqwest)  │   │
//! │  │       ├──────► ProductListView ──┘                             │   │
//! │  │       │                                                         │   │
//! │  │       └──────► Prompt (alert / confirm)    render (text)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  inventory-api  GET/POST/PUT/DELETE /api/products                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - Product API client
//! - [`state`] - List and form view state
//! - [`dashboard`] - Page composition
//! - [`prompt`] - Alert / confirm seam
//! - [`render`] - Text output
//! - [`error`] - Client error types

pub mod client;
pub mod dashboard;
pub mod error;
pub mod prompt;
pub mod render;
pub mod state;

pub use client::{ProductClient, DEFAULT_API_URL};
pub use dashboard::Dashboard;
pub use error::{ClientError, ClientResult};
pub use prompt::{Prompt, DELETE_CONFIRMATION};
pub use state::{ProductField, ProductFormView, ProductListView};
