//! # Listing Pipeline
//!
//! The pure transformation from "every product we fetched" to "the rows on
//! screen".
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Derivation (fixed order)                            │
//! │                                                                         │
//! │  products (full fetched set)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. sort_products      name / quantity / expiry_date, asc or desc      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. matches_search     case-insensitive substring of the name          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. paginate           pages of PAGE_SIZE (10), 1-based                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductPage { rows, current_page, total_pages, .. }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Product;
use crate::PAGE_SIZE;

// =============================================================================
// Sorting
// =============================================================================

/// Column the list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Quantity,
    ExpiryDate,
}

impl SortField {
    /// Column header text.
    pub const fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Quantity => "Quantity",
            SortField::ExpiryDate => "Expiry Date",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "quantity" | "qty" => Ok(SortField::Quantity),
            "expiry_date" | "expiry-date" | "expiry" => Ok(SortField::ExpiryDate),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Header arrow for the active column.
    pub const fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    /// Applies a header click.
    ///
    /// Clicking the active column flips the order; clicking another column
    /// switches to it in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Ascending;
        }
    }
}

/// Absent expiry compares as the latest possible date.
fn expiry_key(product: &Product) -> NaiveDate {
    product.expiry_date.unwrap_or(NaiveDate::MAX)
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
        SortField::ExpiryDate => expiry_key(a).cmp(&expiry_key(b)),
    }
}

/// Sorts products in place.
pub fn sort_products(products: &mut [Product], sort: SortState) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

// =============================================================================
// Filtering
// =============================================================================

/// Case-insensitive substring match of `term` against the product name.
///
/// An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(&term.to_lowercase())
}

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `count` rows: `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Returns the rows of 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}

// =============================================================================
// Composed Pipeline
// =============================================================================

/// Everything the list needs to derive the visible rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub sort: SortState,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            search_term: String::new(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

/// One rendered page of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub rows: Vec<Product>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Rows left after the search filter, across all pages.
    pub filtered_count: usize,
}

impl ProductPage {
    /// Whether "Previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether "Next" is enabled. Always false when there are no pages.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Runs sort → filter → paginate over `products`.
pub fn derive_page(products: &[Product], query: &ListQuery) -> ProductPage {
    let mut sorted = products.to_vec();
    sort_products(&mut sorted, query.sort);

    let filtered: Vec<Product> = sorted
        .into_iter()
        .filter(|p| matches_search(p, &query.search_term))
        .collect();

    ProductPage {
        rows: paginate(&filtered, query.page, PAGE_SIZE),
        current_page: query.page,
        total_pages: total_pages(filtered.len(), PAGE_SIZE),
        filtered_count: filtered.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: i64, expiry: Option<(i32, u32, u32)>) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity,
            expiry_date: expiry.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut products = vec![
            product(1, "banana", 1, None),
            product(2, "Apple", 1, None),
            product(3, "cherry", 1, None),
        ];

        sort_products(&mut products, SortState::default());
        assert_eq!(names(&products), vec!["Apple", "banana", "cherry"]);

        sort_products(
            &mut products,
            SortState {
                field: SortField::Name,
                order: SortOrder::Descending,
            },
        );
        assert_eq!(names(&products), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_by_quantity() {
        let mut products = vec![
            product(1, "a", 12, None),
            product(2, "b", 3, None),
            product(3, "c", 7, None),
        ];

        sort_products(
            &mut products,
            SortState {
                field: SortField::Quantity,
                order: SortOrder::Ascending,
            },
        );
        assert_eq!(names(&products), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_missing_expiry_sorts_last_ascending_first_descending() {
        let mut products = vec![
            product(1, "never", 1, None),
            product(2, "late", 1, Some((2026, 5, 1))),
            product(3, "early", 1, Some((2025, 2, 1))),
        ];

        let mut sort = SortState {
            field: SortField::ExpiryDate,
            order: SortOrder::Ascending,
        };
        sort_products(&mut products, sort);
        assert_eq!(names(&products), vec!["early", "late", "never"]);

        sort.order = SortOrder::Descending;
        sort_products(&mut products, sort);
        assert_eq!(names(&products), vec!["never", "late", "early"]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut sort = SortState::default();
        assert_eq!(sort.field, SortField::Name);
        assert_eq!(sort.order, SortOrder::Ascending);

        sort.toggle(SortField::Name);
        assert_eq!(sort.order, SortOrder::Descending);

        sort.toggle(SortField::Quantity);
        assert_eq!(sort.field, SortField::Quantity);
        assert_eq!(sort.order, SortOrder::Ascending);

        sort.toggle(SortField::Quantity);
        sort.toggle(SortField::Quantity);
        assert_eq!(sort.order, SortOrder::Ascending);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let milk = product(1, "Milk Powder", 20, None);
        assert!(matches_search(&milk, ""));
        assert!(matches_search(&milk, "milk"));
        assert!(matches_search(&milk, "POW"));
        assert!(!matches_search(&milk, "bread"));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_paginate_slices_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3, 10), (21..=25).collect::<Vec<_>>());
        assert!(paginate(&items, 4, 10).is_empty());
    }

    #[test]
    fn test_derive_page_empty_set() {
        let page = derive_page(&[], &ListQuery::default());
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_derive_page_sorts_before_filtering_and_paging() {
        let products: Vec<Product> = (1..=23)
            .map(|i| product(i, &format!("item {:02}", 24 - i), i, None))
            .chain(std::iter::once(product(99, "Bread", 3, None)))
            .collect();

        let query = ListQuery {
            search_term: "ITEM".to_string(),
            sort: SortState::default(),
            page: 3,
        };
        let page = derive_page(&products, &query);

        assert_eq!(page.filtered_count, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(names(&page.rows), vec!["item 21", "item 22", "item 23"]);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}
