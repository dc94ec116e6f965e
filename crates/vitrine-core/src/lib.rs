//! # vitrine-core: Pure Catalog Logic for Vitrine
//!
//! This crate is the **heart** of the Vitrine product catalog. It turns a
//! product collection plus the user's filter, sort and search choices into the
//! ordered list the page displays, and it owns the cart, favorites and compare
//! selection sets.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Rendering Host                               │   │
//! │  │    Search box ──► Filter dropdowns ──► Product grid ──► Badges  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ setter calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-session                              │   │
//! │  │    CatalogSession: set_category, set_search, toggle_favorite   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   query   │  │ selection │  │ validation│  │   │
//! │  │   │  Product  │  │ evaluate  │  │   Cart    │  │  catalog  │  │   │
//! │  │   │  Filters  │  │  filter   │  │ ToggleSet │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating, FilterConfig, SortOption)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Validated, immutable product collection
//! - [`query`] - The catalog query engine
//! - [`selection`] - Cart and toggle sets
//! - [`error`] - Domain error types
//! - [`validation`] - Product data validation
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::money::Money;
//! use vitrine_core::query::evaluate;
//! use vitrine_core::types::{FilterConfig, Product, ProductId, Rating, SortOption};
//!
//! let products = vec![
//!     Product::new(ProductId(1), "Phone A", "Eletrônicos", "TechMaster",
//!         Money::from_cents(10_000), Rating::from_tenths(45)),
//!     Product::new(ProductId(2), "Phone B", "Moda", "FashionTrend",
//!         Money::from_cents(20_000), Rating::from_tenths(30)),
//! ];
//!
//! let filters = FilterConfig::default().with_category("Eletrônicos");
//! let shown = evaluate(&products, &filters, SortOption::None, "");
//!
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].id, ProductId(1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod query;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{evaluate, CatalogQuery};
pub use selection::{Cart, ToggleSet, Toggled};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound of the default price filter, in centavos (R$ 5.000,00).
pub const DEFAULT_PRICE_CEILING_CENTS: i64 = 500_000;

/// Number of features shown on a product card.
pub const CARD_FEATURE_COUNT: usize = 2;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
