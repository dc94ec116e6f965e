//! # Catalog Query Engine
//!
//! Turns `(products, filters, sort, search)` into the ordered list the page
//! displays.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    evaluate()                                           │
//! │                                                                         │
//! │  products (catalog order)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FILTER: category AND price AND brand AND rating AND search            │
//! │       │   (catalog order preserved)                                     │
//! │       ▼                                                                 │
//! │  SORT (stable): None | priceAsc | priceDesc | rating                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Product> ──► replaces the displayed list in full                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is total: every input combination yields a list, possibly
//! empty. A price range with `min > max` yields an empty list.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use ts_rs::TS;

use crate::types::{FilterConfig, Product, SortOption};

// =============================================================================
// Catalog Query
// =============================================================================

/// The three inputs that trigger re-evaluation when they change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub sort: SortOption,
    #[serde(default)]
    pub search: String,
}

impl CatalogQuery {
    pub fn new(filters: FilterConfig, sort: SortOption, search: impl Into<String>) -> Self {
        CatalogQuery {
            filters,
            sort,
            search: search.into(),
        }
    }

    /// Runs the engine over `products` with this query.
    pub fn evaluate<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        evaluate(products, &self.filters, self.sort, &self.search)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Filters and orders `products`.
///
/// A product is kept iff it satisfies every predicate of [`matches`]. The
/// survivors are then sorted with a stable sort, so products with equal keys
/// keep their catalog order.
///
/// ```rust
/// use vitrine_core::money::Money;
/// use vitrine_core::query::evaluate;
/// use vitrine_core::types::{FilterConfig, PriceRange, Product, ProductId, Rating, SortOption};
///
/// let products = vec![
///     Product::new(ProductId(1), "Phone A", "Eletrônicos", "TechMaster",
///         Money::from_reais(100), Rating::from_tenths(45)),
///     Product::new(ProductId(2), "Phone B", "Moda", "FashionTrend",
///         Money::from_reais(200), Rating::from_tenths(30)),
/// ];
/// let filters = FilterConfig::default()
///     .with_price_range(PriceRange::new(Money::zero(), Money::from_reais(1000)));
///
/// let ids: Vec<_> = evaluate(&products, &filters, SortOption::PriceDescending, "")
///     .iter()
///     .map(|p| p.id)
///     .collect();
/// assert_eq!(ids, [ProductId(2), ProductId(1)]);
/// ```
pub fn evaluate<'a>(
    products: &'a [Product],
    filters: &FilterConfig,
    sort: SortOption,
    search: &str,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();

    let mut result: Vec<&Product> = products
        .iter()
        .filter(|p| matches_folded(p, filters, &needle))
        .collect();

    sort_products(&mut result, sort);
    result
}

/// Checks whether a single product passes all five predicates.
///
/// - category is empty or equal (case-sensitive)
/// - price lies within the inclusive range
/// - brand is empty or equal (case-sensitive)
/// - rating is at least the minimum
/// - the lowercased search term is a substring of the lowercased name
pub fn matches(product: &Product, filters: &FilterConfig, search: &str) -> bool {
    matches_folded(product, filters, &search.to_lowercase())
}

fn matches_folded(product: &Product, filters: &FilterConfig, needle: &str) -> bool {
    let match_category = filters.category.is_empty() || product.category == filters.category;
    let match_price = filters.price_range.contains(product.price);
    let match_brand = filters.brand.is_empty() || product.brand == filters.brand;
    let match_rating = product.rating >= filters.min_rating;
    let match_search = needle.is_empty() || product.name.to_lowercase().contains(needle);

    match_category && match_price && match_brand && match_rating && match_search
}

/// Sorts in place. `slice::sort_by_key` is stable, which the display order
/// relies on for ties.
fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::None => {}
        SortOption::PriceAscending => products.sort_by_key(|p| p.price),
        SortOption::PriceDescending => products.sort_by_key(|p| Reverse(p.price)),
        SortOption::RatingDescending => products.sort_by_key(|p| Reverse(p.rating)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
