//! # Validation Module
//!
//! Input validation for product data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client views (inventory-client)                              │
//! │  ├── Presence checks on raw text fields                                │
//! │  └── parse_quantity / parse_optional_date on form text                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP handler (apps/api)                                      │
//! │  ├── JSON deserialization into ProductDraft                            │
//! │  └── THIS MODULE: ProductDraft::validate → ProductInput                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity >= 0)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{parse_quantity, ProductDraft};
//!
//! let draft = ProductDraft {
//!     name: Some("Milk Powder".to_string()),
//!     quantity: Some(parse_quantity("20").unwrap()),
//!     expiry_date: None,
//! };
//! let input = draft.validate().unwrap();
//! assert_eq!(input.quantity, 20);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::types::{optional_date, ProductInput};

// =============================================================================
// Product Draft
// =============================================================================

/// Unvalidated product fields as they arrive from a caller.
///
/// Every field is optional so that a missing `name` or `quantity` becomes a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default, with = "optional_date")]
    pub expiry_date: Option<NaiveDate>,
}

impl ProductDraft {
    /// Checks presence rules and produces a [`ProductInput`].
    ///
    /// ## Rules
    /// - `name` must be present and non-blank (stored trimmed)
    /// - `quantity` must be present and not negative
    /// - `expiry_date` is optional
    pub fn validate(self) -> ValidationResult<ProductInput> {
        let name = self.name.unwrap_or_default();
        let name = validate_product_name(&name)?;

        let quantity = self
            .quantity
            .ok_or_else(|| ValidationError::required("quantity"))?;
        validate_quantity(quantity)?;

        Ok(ProductInput {
            name,
            quantity,
            expiry_date: self.expiry_date,
        })
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Bread ").unwrap(), "Bread");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(name.to_string())
}

/// Validates a quantity. Zero is allowed (out of stock).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses quantity text typed into a form.
///
/// Blank text is a [`ValidationError::Required`]; anything that is not a
/// whole number is [`ValidationError::InvalidFormat`].
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::required("quantity"));
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::invalid_format("quantity", "must be a whole number"))
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, and timestamps whose date part is `YYYY-MM-DD`
/// (everything from the `T` on is dropped).
pub fn parse_calendar_date(text: &str) -> ValidationResult<NaiveDate> {
    let date_part = text.trim().split('T').next().unwrap_or_default();

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format("expiry_date", "expected YYYY-MM-DD"))
}

/// Parses optional date text from a form. Blank text means no expiry.
pub fn parse_optional_date(text: &str) -> ValidationResult<Option<NaiveDate>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    parse_calendar_date(text).map(Some)
}

// =============================================================================
// Unit Tests
// =============================================================================
