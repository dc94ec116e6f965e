//! # Catalog
//!
//! The validated product collection for one session. Built once, never
//! mutated afterwards.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::query::CatalogQuery;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// An immutable, validated product collection in display order.
///
/// ## Invariants
/// - Every product passed [`validate_product`]
/// - Ids are unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates `products` and takes ownership of them.
    ///
    /// ## Returns
    /// - `Err(CoreError::Validation)` for the first product with a bad field
    /// - `Err(CoreError::DuplicateProductId)` for the first repeated id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product).map_err(|source| CoreError::Validation {
                id: product.id,
                source,
            })?;

            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }

        Ok(Catalog { products })
    }

    /// Decodes a JSON array of products and validates it.
    ///
    /// Prices are decimal reais (at most two decimal places) and ratings are
    /// decimal stars (at most one decimal place).
    ///
    /// ```rust
    /// use vitrine_core::{Catalog, Money};
    ///
    /// let json = r#"[{"id": 1, "name": "Phone A", "category": "Eletrônicos",
    ///     "brand": "TechMaster", "price": 100, "originalPrice": 120.5,
    ///     "rating": 4.5, "image": "/api/placeholder/300/400"}]"#;
    ///
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.products()[0].original_price, Money::from_cents(12_050));
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// All products in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order, for the category dropdown.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct brands in first-seen order, for the brand dropdown.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Runs the query engine over this catalog.
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.evaluate(&self.products)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;
    use crate::types::{Rating, SortOption};

    fn product(id: u32, category: &str, brand: &str) -> Product {
        Product::new(
            ProductId(id),
            format!("Produto {}", id),
            category,
            brand,
            Money::from_reais(100),
            Rating::from_tenths(40),
        )
    }

    #[test]
    fn test_new_accepts_unique_ids() {
        let catalog = Catalog::new(vec![
            product(1, "Eletrônicos", "TechMaster"),
            product(21, "Moda", "FashionTrend"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(ProductId(21)).unwrap().category, "Moda");
        assert!(catalog.get(ProductId(2)).is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            product(1, "Eletrônicos", "TechMaster"),
            product(1, "Moda", "FashionTrend"),
        ])
        .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateProductId(ProductId(1))));
    }

    #[test]
    fn test_new_rejects_invalid_product() {
        let mut bad = product(3, "Casa", "HomeStyle");
        bad.name = String::new();

        let err = Catalog::new(vec![bad]).unwrap_err();
        match err {
            CoreError::Validation { id, source } => {
                assert_eq!(id, ProductId(3));
                assert_eq!(
                    source,
                    ValidationError::Required {
                        field: "name".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.query(&CatalogQuery::default()).is_empty());
    }

    #[test]
    fn test_facets_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            product(1, "Moda", "FashionTrend"),
            product(2, "Casa", "HomeStyle"),
            product(3, "Moda", "TechMaster"),
            product(4, "Eletrônicos", "HomeStyle"),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), ["Moda", "Casa", "Eletrônicos"]);
        assert_eq!(catalog.brands(), ["FashionTrend", "HomeStyle", "TechMaster"]);
    }

    #[test]
    fn test_from_json_loads_flagship_record() {
        let json = r#"[{
            "id": 1,
            "name": "Smartphone Pro Max",
            "category": "Eletrônicos",
            "brand": "TechMaster",
            "price": 2999.99,
            "originalPrice": 3499.99,
            "rating": 4.7,
            "image": "/api/placeholder/300/400",
            "features": ["5G", "Câmera Quádrupla", "Bateria 5000mAh"]
        }]"#;

        let catalog = Catalog::from_json(json).unwrap();
        let phone = catalog.get(ProductId(1)).unwrap();

        assert_eq!(phone.price, Money::from_cents(299_999));
        assert_eq!(phone.original_price, Money::from_cents(349_999));
        assert_eq!(phone.rating, Rating::from_tenths(47));
        assert_eq!(phone.features.len(), 3);
        assert_eq!(phone.discount_percent(), 14);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_values() {
        let record = |price: &str, rating: &str| {
            format!(
                r#"[{{"id": 1, "name": "X", "category": "Casa", "brand": "HomeStyle",
                    "price": {price}, "originalPrice": 10, "rating": {rating}, "image": ""}}]"#
            )
        };

        let err = Catalog::from_json(&record("-5", "4")).unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));

        let err = Catalog::from_json(&record("5", "5.5")).unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));

        let err = Catalog::from_json(&record("9.999", "4")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        let err = Catalog::from_json(r#"[{"id": "one"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn test_query_uses_catalog_order() {
        let catalog = Catalog::new(vec![
            product(7, "Casa", "HomeStyle"),
            product(2, "Casa", "HomeStyle"),
        ])
        .unwrap();

        let query = CatalogQuery::new(Default::default(), SortOption::PriceAscending, "");
        let ids: Vec<_> = catalog.query(&query).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [7, 2]);
    }
}
