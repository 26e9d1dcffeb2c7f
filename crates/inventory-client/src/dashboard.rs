//! # Dashboard
//!
//! Composes the form, the filter buttons and the list into one page, and
//! routes every failure to the [`Prompt`].
//!
//! ## Refetch Triggers
//! ```text
//! set_filter(view)   ─┐
//! submit_form() ok   ─┼──► list.refresh()  (page resets to 1)
//! refresh()          ─┘
//! ```

use chrono::NaiveDate;
use inventory_core::listing::SortField;
use inventory_core::{Product, ProductView};
use tracing::warn;

use crate::client::ProductClient;
use crate::error::ClientResult;
use crate::prompt::Prompt;
use crate::render::render_dashboard;
use crate::state::{ProductField, ProductFormView, ProductListView};

/// The whole dashboard page.
#[derive(Debug)]
pub struct Dashboard<P> {
    client: ProductClient,
    prompt: P,
    form: ProductFormView,
    list: ProductListView,
}

impl<P: Prompt> Dashboard<P> {
    pub fn new(client: ProductClient, prompt: P) -> Self {
        Dashboard {
            client,
            prompt,
            form: ProductFormView::new(),
            list: ProductListView::new(),
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn form(&self) -> &ProductFormView {
        &self.form
    }

    pub fn list(&self) -> &ProductListView {
        &self.list
    }

    /// Alerts on failure and hands back the success value.
    fn report<T>(&self, result: ClientResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "Dashboard operation failed");
                self.prompt.alert(&err.user_message());
                None
            }
        }
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Refetches the active view.
    pub async fn refresh(&mut self) -> bool {
        let result = self.list.refresh(&self.client).await;
        self.report(result).is_some()
    }

    /// Clicks a filter button. The active button is disabled, so choosing
    /// the current filter does nothing.
    pub async fn set_filter(&mut self, view: ProductView) -> bool {
        if self.list.filter() == view {
            return false;
        }
        let result = self.list.set_filter(&self.client, view).await;
        self.report(result).is_some()
    }

    // =========================================================================
    // List
    // =========================================================================

    pub fn search(&mut self, term: impl Into<String>) {
        self.list.set_search_term(term);
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.list.toggle_sort(field);
    }

    pub fn next_page(&mut self) -> bool {
        self.list.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.list.previous_page()
    }

    /// Opens the inline editor on a row of the loaded products.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let started = self.list.start_edit(id);
        if !started {
            self.prompt.alert(&format!("No product with id {} is listed.", id));
        }
        started
    }

    pub fn set_edit_field(&mut self, field: ProductField, value: impl Into<String>) -> bool {
        let changed = self.list.edit_field(field, value);
        if !changed {
            self.prompt.alert("No product is being edited.");
        }
        changed
    }

    pub async fn save_edit(&mut self) -> Option<Product> {
        let result = self.list.save_edit(&self.client).await;
        self.report(result)
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
    }

    /// Deletes after confirming. Returns `true` only if a row was removed.
    pub async fn delete(&mut self, id: i64) -> bool {
        let result = self.list.delete(&self.client, &self.prompt, id).await;
        self.report(result).unwrap_or(false)
    }

    // =========================================================================
    // Form
    // =========================================================================

    pub fn set_form_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submits the form; on success the list refetches its active view.
    pub async fn submit_form(&mut self) -> Option<Product> {
        let result = self.form.submit(&self.client).await;
        let created = self.report(result)?;
        self.refresh().await;
        Some(created)
    }

    /// Renders the page as text.
    pub fn render(&self, today: NaiveDate) -> String {
        render_dashboard(&self.form, &self.list, today)
    }
}
