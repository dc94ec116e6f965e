//! # Session Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vitrine                                │
//! │                                                                         │
//! │  Host call                    Rust session                              │
//! │  ─────────                    ────────────                              │
//! │                                                                         │
//! │  toggle_favorite(99) ──► catalog lookup ──► UnknownProduct(99)          │
//! │                                                                         │
//! │  SessionConfig::from_env ──► bad VITRINE_* value ──► ConfigError        │
//! │                                                                         │
//! │  Catalog::new ──► duplicate id / bad field ──► CoreError                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vitrine_core::{CoreError, ProductId};

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The id does not belong to the session catalog.
    #[error("Product not in catalog: {0}")]
    UnknownProduct(ProductId),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog data was rejected.
    #[error("Catalog error: {0}")]
    Core(#[from] CoreError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SessionError::UnknownProduct(ProductId(99));
        assert_eq!(err.to_string(), "Product not in catalog: 99");

        let err: SessionError = ConfigError::InvalidValue("VITRINE_SEED".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for VITRINE_SEED"
        );
    }

    #[test]
    fn test_core_error_converts() {
        let err: SessionError = CoreError::DuplicateProductId(ProductId(1)).into();
        assert!(matches!(err, SessionError::Core(_)));
    }
}
