//! # Domain Types
//!
//! Core domain types used throughout the inventory tracker.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductInput   │   │  ProductView    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  name           │   │  All            │       │
//! │  │  name           │   │  quantity       │   │  Expired        │       │
//! │  │  quantity       │   │  expiry_date?   │   │  NearExpiry     │       │
//! │  │  expiry_date?   │   │  (validated)    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on insert and never changes. Updates
//! replace name, quantity and expiry date as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::{is_low_stock, ExpiryStatus};

// =============================================================================
// Product
// =============================================================================

/// A tracked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name, never empty.
    pub name: String,

    /// Units on hand, never negative.
    pub quantity: i64,

    /// Calendar expiry date. `None` means the product never expires.
    #[serde(default, with = "optional_date")]
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Classifies the product's expiry relative to `today`.
    #[inline]
    pub fn expiry_status(&self, today: NaiveDate) -> ExpiryStatus {
        ExpiryStatus::classify(self.expiry_date, today)
    }

    /// Checks if the product should carry the "Low" badge.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.quantity)
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Validated fields for creating or fully replacing a product.
///
/// Only [`crate::validation::ProductDraft::validate`] produces one outside of
/// tests, so holding a `ProductInput` means the presence rules passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub quantity: i64,
    #[serde(default, with = "optional_date")]
    pub expiry_date: Option<NaiveDate>,
}

// =============================================================================
// Deleted Product
// =============================================================================

/// Response body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedProduct {
    pub message: String,
    pub product: Product,
}

impl DeletedProduct {
    /// Message attached to every successful delete.
    pub const MESSAGE: &'static str = "Product deleted successfully";

    pub fn new(product: Product) -> Self {
        DeletedProduct {
            message: Self::MESSAGE.to_string(),
            product,
        }
    }
}

// =============================================================================
// Product View
// =============================================================================

/// Which subset of products a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductView {
    /// Every product, ordered by id.
    #[default]
    All,
    /// Expiry strictly before today, ordered by expiry date.
    Expired,
    /// Expiry within the near-expiry window, ordered by expiry date.
    NearExpiry,
}

impl ProductView {
    /// Path suffix appended to the collection URL for this view.
    pub const fn path_suffix(&self) -> &'static str {
        match self {
            ProductView::All => "",
            ProductView::Expired => "/expired",
            ProductView::NearExpiry => "/near-expiry",
        }
    }

    /// Button label shown on the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductView::All => "All Products",
            ProductView::Expired => "Expired Products",
            ProductView::NearExpiry => "Near Expiry (7 days)",
        }
    }

    /// All views in display order.
    pub const ALL: [ProductView; 3] = [
        ProductView::All,
        ProductView::Expired,
        ProductView::NearExpiry,
    ];
}

impl std::fmt::Display for ProductView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductView::All => write!(f, "all"),
            ProductView::Expired => write!(f, "expired"),
            ProductView::NearExpiry => write!(f, "near-expiry"),
        }
    }
}

impl std::str::FromStr for ProductView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ProductView::All),
            "expired" => Ok(ProductView::Expired),
            "near-expiry" | "near_expiry" | "near" => Ok(ProductView::NearExpiry),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

// =============================================================================
// Date Serialization
// =============================================================================

/// Serde adapter for optional calendar dates.
///
/// Serializes as `"YYYY-MM-DD"` or `null`. Deserializing is lenient in the
/// ways real payloads differ:
/// - `null`, missing and `""` all mean "no expiry"
/// - timestamps (`"2025-01-01T00:00:00.000Z"`) are cut to their date part
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::validation::parse_calendar_date;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_calendar_date(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
