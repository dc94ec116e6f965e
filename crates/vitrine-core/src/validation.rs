//! # Validation Module
//!
//! Product data validation, run once when the host hands over a catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Field types: ids are integers, prices are centavos                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present and bounded                                         │
//! │  ├── Prices non-negative                                               │
//! │  └── Ratings within 0.0-5.0                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog::new                                                 │
//! │  └── Ids unique across the collection                                  │
//! │                                                                         │
//! │  After this point the query engine assumes well-formed input.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filter values are never validated: an inverted price range is a legal
//! filter state that simply matches nothing.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, Rating};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Smartphone Pro Max").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a rating.
///
/// Ratings built with [`Rating::from_tenths`] are always in range; this catches
/// deserialized values above 5.0.
pub fn validate_rating(rating: Rating) -> ValidationResult<()> {
    if rating > Rating::MAX {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: Rating::MAX.tenths() as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product that carries a constraint.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price("price", product.price)?;
    validate_price("originalPrice", product.original_price)?;
    validate_rating(product.rating)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn valid_product() -> Product {
        Product::new(
            ProductId(1),
            "Produto Genérico 1",
            "Casa",
            "HomeStyle",
            Money::from_reais(50),
            Rating::from_tenths(20),
        )
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Produto Genérico 1").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"Ç".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_cents(1099)).is_ok());
        assert_eq!(
            validate_price("price", Money::from_cents(-1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );
    }

    #[test]
    fn test_validate_rating_rejects_deserialized_overflow() {
        let rating: Rating = serde_json::from_str("5.1").unwrap();
        assert!(validate_rating(rating).is_err());
        assert!(validate_rating(Rating::MAX).is_ok());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&valid_product()).is_ok());

        let mut bad = valid_product();
        bad.original_price = Money::from_cents(-5);
        let err = validate_product(&bad).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "originalPrice"));
    }
}
