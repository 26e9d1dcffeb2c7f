//! New-product form.
//!
//! All three fields start empty. A successful submit clears them; a failed
//! one keeps what was typed.

use inventory_core::Product;
use tracing::info;

use super::{parse_input, ProductField};
use crate::client::ProductClient;
use crate::error::ClientResult;

/// Reported when name or quantity is blank on submit.
pub const FORM_FIELDS_REQUIRED: &str = "Please provide product name and quantity.";

/// State of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormView {
    name: String,
    quantity: String,
    expiry_date: String,
}

impl ProductFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Replaces the text of one field.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Name => self.name = value,
            ProductField::Quantity => self.quantity = value,
            ProductField::ExpiryDate => self.expiry_date = value,
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates and posts the form.
    ///
    /// On success the fields are cleared and the created record returned so
    /// the caller can refresh the list.
    pub async fn submit(&mut self, client: &ProductClient) -> ClientResult<Product> {
        let input = parse_input(
            &self.name,
            &self.quantity,
            &self.expiry_date,
            FORM_FIELDS_REQUIRED,
        )?;

        let product = client.create(&input).await?;
        info!(id = product.id, name = %product.name, "Product added");

        self.clear();
        Ok(product)
    }
}
