//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog construction failures                  │
//! │  └── ValidationError  - Product data validation failures               │
//! │                                                                         │
//! │  vitrine-session errors (separate crate)                               │
//! │  ├── SessionError     - Unknown product, bad config                    │
//! │  └── ConfigError      - Invalid environment values                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → Host               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The query engine and the selection sets never fail. Errors only exist at
//! the boundary where the host hands over product data.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building a catalog from host-supplied data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two products share the same id.
    ///
    /// ## When This Occurs
    /// - The host dataset was concatenated from two sources with overlapping ids
    /// - A generator produced colliding ids
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// The product payload could not be decoded.
    #[error("Invalid catalog data: {0}")]
    InvalidData(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error for product {id}: {source}")]
    Validation {
        id: ProductId,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product field validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
