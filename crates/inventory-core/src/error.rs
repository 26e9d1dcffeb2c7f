//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core (this file)                                            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  inventory-db                                                          │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  apps/api                                                              │
//! │  └── ApiError         - What HTTP callers see (status + JSON body)     │
//! │                                                                         │
//! │  inventory-client                                                      │
//! │  └── ClientError      - What the dashboard alerts                      │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → ApiError → ClientError → Alert      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store access, so a failed validation never touches a
/// row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must not be below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., "abc" as a quantity, "2025-13-40" as a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
