//! # Text Rendering
//!
//! Plain-text rendering of the dashboard for a terminal.
//!
//! ## Layout
//! ```text
//! Inventory Dashboard
//! ===================
//!
//! New product  name: "Milk"  quantity: ""  expiry_date: ""
//!
//! (All Products)  [Expired Products]  [Near Expiry (7 days)]   ← active is disabled
//!
//! Inventory Products   search: "mi"
//!     ID  Name ▲          Quantity   Expiry Date
//!   ! 12  Milk            3 [Low]    2024-01-01 [Expired]
//!     14  Mints           40         N/A
//!   * 15  Mixed Nuts      20         2024-02-03            ← row being edited
//!
//! (Previous)  Page 1 of 1  (Next)                          ← (..) is disabled
//! ```

use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use inventory_core::listing::{ProductPage, SortField, SortState};
use inventory_core::{ExpiryStatus, Product, ProductView};

use crate::state::{EditDraft, ProductFormView, ProductListView};

/// Page heading.
pub const TITLE: &str = "Inventory Dashboard";

/// Table heading.
pub const TABLE_TITLE: &str = "Inventory Products";

/// Text shown for a product without an expiry date.
pub const NO_EXPIRY: &str = "N/A";

/// Badge next to quantities below the low-stock threshold.
pub const LOW_STOCK_BADGE: &str = "Low";

const NAME_MIN_WIDTH: usize = 16;
const QUANTITY_WIDTH: usize = 10;

/// Renders a button label: `[label]` when enabled, `(label)` when disabled.
pub fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("({})", label)
    }
}

/// Column header text with the sort arrow on the active column.
pub fn column_header(field: SortField, sort: SortState) -> String {
    if sort.field == field {
        format!("{} {}", field.label(), sort.order.arrow())
    } else {
        field.label().to_string()
    }
}

/// Quantity cell, with the "Low" badge when applicable.
pub fn quantity_cell(product: &Product) -> String {
    if product.is_low_stock() {
        format!("{} [{}]", product.quantity, LOW_STOCK_BADGE)
    } else {
        product.quantity.to_string()
    }
}

/// Expiry cell: the date plus an "Expired" or "Near Expiry" badge, or "N/A".
pub fn expiry_cell(product: &Product, today: NaiveDate) -> String {
    let Some(date) = product.expiry_date else {
        return NO_EXPIRY.to_string();
    };

    let date = date.format("%Y-%m-%d");
    match product.expiry_status(today).badge() {
        Some(badge) => format!("{} [{}]", date, badge),
        None => date.to_string(),
    }
}

/// Filter buttons; the active filter is rendered disabled.
pub struct FilterBar {
    pub active: ProductView,
}

impl Display for FilterBar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buttons: Vec<String> = ProductView::ALL
            .iter()
            .map(|view| button(view.label(), *view != self.active))
            .collect();
        write!(f, "{}", buttons.join("  "))
    }
}

/// The create form's current field text.
pub struct FormLine<'a> {
    pub form: &'a ProductFormView,
}

impl Display for FormLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "New product  name: {:?}  quantity: {:?}  expiry_date: {:?}",
            self.form.name(),
            self.form.quantity(),
            self.form.expiry_date()
        )
    }
}

/// The products table with its pagination footer.
pub struct ProductTable<'a> {
    pub page: &'a ProductPage,
    pub sort: SortState,
    pub search_term: &'a str,
    pub editing: Option<&'a EditDraft>,
    pub today: NaiveDate,
}

impl<'a> ProductTable<'a> {
    /// Builds the table for the list view's current page.
    pub fn new(page: &'a ProductPage, list: &'a ProductListView, today: NaiveDate) -> Self {
        ProductTable {
            page,
            sort: list.sort(),
            search_term: list.search_term(),
            editing: list.editing(),
            today,
        }
    }

    fn name_width(&self) -> usize {
        self.page
            .rows
            .iter()
            .map(|p| p.name.chars().count())
            .chain(self.editing.map(|d| d.name.chars().count()))
            .max()
            .unwrap_or(0)
            .max(NAME_MIN_WIDTH)
    }

    fn write_row(&self, f: &mut Formatter<'_>, product: &Product, width: usize) -> fmt::Result {
        let (marker, name, quantity, expiry) = match self.editing {
            Some(draft) if draft.id == product.id => (
                '*',
                draft.name.clone(),
                draft.quantity.clone(),
                draft.expiry_date.clone(),
            ),
            _ => {
                let marker = if product.expiry_status(self.today) == ExpiryStatus::Expired {
                    '!'
                } else {
                    ' '
                };
                (
                    marker,
                    product.name.clone(),
                    quantity_cell(product),
                    expiry_cell(product, self.today),
                )
            }
        };

        writeln!(
            f,
            "  {} {:>4}  {:<width$}  {:<qty$}  {}",
            marker,
            product.id,
            name,
            quantity,
            expiry,
            width = width,
            qty = QUANTITY_WIDTH
        )
    }
}

impl Display for ProductTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.name_width();

        write!(f, "{}", TABLE_TITLE)?;
        if !self.search_term.is_empty() {
            write!(f, "   search: {:?}", self.search_term)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "    {:>4}  {:<width$}  {:<qty$}  {}",
            "ID",
            column_header(SortField::Name, self.sort),
            column_header(SortField::Quantity, self.sort),
            column_header(SortField::ExpiryDate, self.sort),
            width = width,
            qty = QUANTITY_WIDTH
        )?;

        if self.page.rows.is_empty() {
            writeln!(f, "    (no products)")?;
        }
        for product in &self.page.rows {
            self.write_row(f, product, width)?;
        }

        writeln!(f)?;
        write!(
            f,
            "{}  Page {} of {}  {}",
            button("Previous", self.page.has_previous()),
            self.page.current_page,
            self.page.total_pages,
            button("Next", self.page.has_next())
        )
    }
}

/// Renders the whole dashboard screen.
pub fn render_dashboard(
    form: &ProductFormView,
    list: &ProductListView,
    today: NaiveDate,
) -> String {
    let page = list.page();
    let underline = "=".repeat(TITLE.chars().count());

    format!(
        "{}\n{}\n\n{}\n\n{}\n\n{}\n",
        TITLE,
        underline,
        FormLine { form },
        FilterBar {
            active: list.filter()
        },
        ProductTable::new(&page, list, today)
    )
}
