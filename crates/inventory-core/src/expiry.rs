//! # Expiry Rules
//!
//! Date-granular expiry classification shared by the store queries and the
//! list view badges.
//!
//! ## Timeline
//! ```text
//!            expired            │      near-expiry (inclusive)      │  fresh
//!  ─────────────────────────────┼───────────────────────────────────┼────────►
//!                             today                           today + 7 days
//! ```
//!
//! Products without an expiry date are never expired and never near expiry.

use chrono::{Days, Local, NaiveDate};

use crate::{LOW_STOCK_THRESHOLD, NEAR_EXPIRY_DAYS};

/// Returns the current local calendar date.
///
/// This is the only clock read in the crate; every other function takes
/// `today` as an argument.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the inclusive near-expiry window `[today, today + 7 days]`.
pub fn near_expiry_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today
        .checked_add_days(Days::new(NEAR_EXPIRY_DAYS))
        .unwrap_or(NaiveDate::MAX);
    (today, end)
}

/// Checks the presentation-only low-stock flag.
#[inline]
pub fn is_low_stock(quantity: i64) -> bool {
    quantity < LOW_STOCK_THRESHOLD
}

// =============================================================================
// Expiry Status
// =============================================================================

/// Where a product's expiry date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// No expiry date recorded.
    NoExpiry,
    /// Expiry date strictly before today.
    Expired,
    /// Expiry date within `[today, today + 7 days]`.
    NearExpiry,
    /// Expiry date after the near-expiry window.
    Fresh,
}

impl ExpiryStatus {
    /// Classifies an optional expiry date against `today`.
    pub fn classify(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(expiry) = expiry_date else {
            return ExpiryStatus::NoExpiry;
        };

        let (start, end) = near_expiry_window(today);
        if expiry < start {
            ExpiryStatus::Expired
        } else if expiry <= end {
            ExpiryStatus::NearExpiry
        } else {
            ExpiryStatus::Fresh
        }
    }

    /// Badge text shown next to the date, if any.
    pub const fn badge(&self) -> Option<&'static str> {
        match self {
            ExpiryStatus::Expired => Some("Expired"),
            ExpiryStatus::NearExpiry => Some("Near Expiry"),
            ExpiryStatus::NoExpiry | ExpiryStatus::Fresh => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_is_seven_days_inclusive() {
        let (start, end) = near_expiry_window(date(2025, 12, 28));
        assert_eq!(start, date(2025, 12, 28));
        assert_eq!(end, date(2026, 1, 4));
    }

    #[test]
    fn test_classify_boundaries() {
        let today = date(2025, 1, 10);

        assert_eq!(ExpiryStatus::classify(None, today), ExpiryStatus::NoExpiry);
        assert_eq!(
            ExpiryStatus::classify(Some(date(2025, 1, 9)), today),
            ExpiryStatus::Expired
        );
        assert_eq!(
            ExpiryStatus::classify(Some(today), today),
            ExpiryStatus::NearExpiry
        );
        assert_eq!(
            ExpiryStatus::classify(Some(date(2025, 1, 17)), today),
            ExpiryStatus::NearExpiry
        );
        assert_eq!(
            ExpiryStatus::classify(Some(date(2025, 1, 18)), today),
            ExpiryStatus::Fresh
        );
    }

    #[test]
    fn test_badges() {
        assert_eq!(ExpiryStatus::Expired.badge(), Some("Expired"));
        assert_eq!(ExpiryStatus::NearExpiry.badge(), Some("Near Expiry"));
        assert_eq!(ExpiryStatus::Fresh.badge(), None);
        assert_eq!(ExpiryStatus::NoExpiry.badge(), None);
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(is_low_stock(0));
        assert!(is_low_stock(4));
        assert!(!is_low_stock(5));
    }
}
