//! # Product List View
//!
//! Holds the fetched products plus everything needed to derive the visible
//! page, and runs the inline edit and delete flows.
//!
//! ## Edit Flow
//! ```text
//!              start_edit(id)                 save_edit() ok
//!   Viewing ────────────────────► Editing ──────────────────► Viewing
//!      ▲                            │  │                       (row replaced)
//!      │         cancel_edit()      │  │ save_edit() err
//!      └────────────────────────────┘  └──► Editing (alerted, draft kept)
//! ```
//!
//! Starting an edit on another row abandons the current draft.

use inventory_core::listing::{derive_page, ListQuery, ProductPage, SortField, SortState};
use inventory_core::{Product, ProductView};
use tracing::{debug, info};

use super::{date_input_text, parse_input, ProductField};
use crate::client::ProductClient;
use crate::error::{ClientError, ClientResult};
use crate::prompt::{Prompt, DELETE_CONFIRMATION};

/// Reported when saving an edit with a blank name or quantity.
pub const EDIT_FIELDS_REQUIRED: &str = "Name and quantity are required.";

/// Field text of the row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub expiry_date: String,
}

impl EditDraft {
    /// Seeds a draft from the product's current values.
    pub fn from_product(product: &Product) -> Self {
        EditDraft {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            expiry_date: date_input_text(product.expiry_date),
        }
    }

    fn set_field(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Quantity => self.quantity = value,
            ProductField::ExpiryDate => self.expiry_date = value,
        }
    }
}

/// State of the products table.
#[derive(Debug, Clone, Default)]
pub struct ProductListView {
    products: Vec<Product>,
    filter: ProductView,
    query: ListQuery,
    editing: Option<EditDraft>,
}

impl ProductListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetched product, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active view filter.
    pub fn filter(&self) -> ProductView {
        self.filter
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn sort(&self) -> SortState {
        self.query.sort
    }

    pub fn current_page(&self) -> usize {
        self.query.page
    }

    /// Draft of the row being edited, if any.
    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// Derives the visible page: sort → search → paginate.
    pub fn page(&self) -> ProductPage {
        derive_page(&self.products, &self.query)
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Replaces the product array with a fetch result and returns to page 1.
    pub fn load(&mut self, products: Vec<Product>) {
        debug!(count = products.len(), filter = %self.filter, "Products loaded");
        self.products = products;
        self.query.page = 1;
    }

    /// Refetches the active view.
    ///
    /// On failure the previous products stay in place.
    pub async fn refresh(&mut self, client: &ProductClient) -> ClientResult<()> {
        let products = client.fetch(self.filter).await?;
        self.load(products);
        Ok(())
    }

    /// Switches the view filter and refetches.
    pub async fn set_filter(
        &mut self,
        client: &ProductClient,
        filter: ProductView,
    ) -> ClientResult<()> {
        self.filter = filter;
        self.refresh(client).await
    }

    // =========================================================================
    // Search, Sort, Paging
    // =========================================================================

    /// Sets the search term. The current page is kept.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    /// Applies a column header click.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.query.sort.toggle(field);
    }

    /// Advances one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.page().has_next() {
            return false;
        }
        self.query.page += 1;
        true
    }

    /// Goes back one page. Returns `false` when already on page 1.
    pub fn previous_page(&mut self) -> bool {
        if self.query.page <= 1 {
            return false;
        }
        self.query.page -= 1;
        true
    }

    // =========================================================================
    // Inline Edit
    // =========================================================================

    /// Puts a row into edit mode. Returns `false` if no such product is loaded.
    pub fn start_edit(&mut self, id: i64) -> bool {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.editing = Some(EditDraft::from_product(product));
                true
            }
            None => false,
        }
    }

    /// Changes one field of the draft. Returns `false` when nothing is being edited.
    pub fn edit_field(&mut self, field: ProductField, value: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(draft) => {
                draft.set_field(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Discards the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates the draft and sends it.
    ///
    /// Success swaps the server's record into the array and leaves edit
    /// mode. Failure keeps the draft.
    pub async fn save_edit(&mut self, client: &ProductClient) -> ClientResult<Product> {
        let draft = self
            .editing
            .as_ref()
            .ok_or_else(|| ClientError::Validation("No product is being edited.".to_string()))?;

        let input = parse_input(
            &draft.name,
            &draft.quantity,
            &draft.expiry_date,
            EDIT_FIELDS_REQUIRED,
        )?;

        let updated = client.update(draft.id, &input).await?;
        info!(id = updated.id, "Product saved");

        if let Some(row) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *row = updated.clone();
        }
        self.editing = None;
        Ok(updated)
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Deletes a product after confirmation.
    ///
    /// Returns `Ok(false)` when the user declined. On failure nothing local
    /// changes.
    pub async fn delete<P: Prompt + ?Sized>(
        &mut self,
        client: &ProductClient,
        prompt: &P,
        id: i64,
    ) -> ClientResult<bool> {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(false);
        }

        client.delete(id).await?;
        info!(id, "Product removed");

        self.products.retain(|p| p.id != id);
        if self.editing.as_ref().is_some_and(|d| d.id == id) {
            self.editing = None;
        }
        Ok(true)
    }

}

// =============================================================================
// Unit Tests
// =============================================================================
