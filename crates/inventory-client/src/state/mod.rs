//! # View State
//!
//! Plain structs holding what the dashboard shows, with explicit refetch
//! points instead of reactive effects.
//!
//! ```text
//! ┌──────────────────────┐   created product    ┌──────────────────────┐
//! │   ProductFormView    │ ───────────────────► │   ProductListView    │
//! │  name / qty / expiry │   (list refetches)   │  products, search,   │
//! └──────────────────────┘                      │  sort, page, editing │
//!                                               └──────────────────────┘
//! ```

pub mod form;
pub mod list;

pub use form::{ProductFormView, FORM_FIELDS_REQUIRED};
pub use list::{EditDraft, ProductListView, EDIT_FIELDS_REQUIRED};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use inventory_core::validation::{parse_optional_date, parse_quantity};
use inventory_core::ProductInput;

use crate::error::{ClientError, ClientResult};

/// Text input fields shared by the create form and the inline editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Quantity,
    ExpiryDate,
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductField::Name => write!(f, "name"),
            ProductField::Quantity => write!(f, "quantity"),
            ProductField::ExpiryDate => write!(f, "expiry_date"),
        }
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProductField::Name),
            "quantity" | "qty" => Ok(ProductField::Quantity),
            "expiry_date" | "expiry-date" | "expiry" => Ok(ProductField::ExpiryDate),
            other => Err(format!("unknown field: {}", other)),
        }
    }
}

/// Formats a date the way date inputs hold it; empty when absent.
pub(crate) fn date_input_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Converts raw field text into a [`ProductInput`].
///
/// `missing_message` is reported when name or quantity is blank; the form
/// and the inline editor word it differently.
pub(crate) fn parse_input(
    name: &str,
    quantity: &str,
    expiry_date: &str,
    missing_message: &str,
) -> ClientResult<ProductInput> {
    if name.trim().is_empty() || quantity.trim().is_empty() {
        return Err(ClientError::Validation(missing_message.to_string()));
    }

    let quantity = parse_quantity(quantity).map_err(|e| ClientError::Validation(e.to_string()))?;
    let expiry_date =
        parse_optional_date(expiry_date).map_err(|e| ClientError::Validation(e.to_string()))?;

    Ok(ProductInput {
        name: name.trim().to_string(),
        quantity,
        expiry_date,
    })
}
