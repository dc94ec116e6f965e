//! # Reference Catalog
//!
//! Synthetic product data for development and demos.
//!
//! ## Generated Products
//! - One flagship product (id 1, "Smartphone Pro Max")
//! - `count` generic products with ids starting at 21, cycling through
//!   the categories and brands below
//!
//! Each generic product has:
//! - Name: `Produto Genérico {n}`
//! - Random price and list price: R$ 50 - R$ 5049 (whole reais)
//! - Random rating: 0.0 - 4.9
//!
//! Generation is seeded, so the same `(count, seed)` always yields the same
//! catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vitrine_core::{Catalog, CoreResult, Money, Product, ProductId, Rating};

/// Categories cycled by generic products.
pub const CATEGORIES: [&str; 3] = ["Eletrônicos", "Moda", "Casa"];

/// Brands cycled by generic products, aligned with [`CATEGORIES`].
pub const BRANDS: [&str; 3] = ["TechMaster", "FashionTrend", "HomeStyle"];

/// Placeholder image reference used by every product.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/400";

/// First id assigned to generic products.
const FIRST_GENERIC_ID: u32 = 21;

/// Builds the reference product list.
pub fn reference_products(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut products = Vec::with_capacity(count + 1);

    products.push(flagship());

    for i in 0..count {
        let price = Money::from_reais(rng.gen_range(50..5050));
        let original_price = Money::from_reais(rng.gen_range(50..5050));
        let rating = Rating::from_tenths(rng.gen_range(0..50));

        products.push(
            Product::new(
                ProductId(FIRST_GENERIC_ID + i as u32),
                format!("Produto Genérico {}", i + 1),
                CATEGORIES[i % CATEGORIES.len()],
                BRANDS[i % BRANDS.len()],
                price,
                rating,
            )
            .with_original_price(original_price)
            .with_image(PLACEHOLDER_IMAGE)
            .with_features(["Característica A", "Característica B", "Característica C"]),
        );
    }

    products
}

/// Builds and validates the reference catalog.
pub fn reference_catalog(count: usize, seed: u64) -> CoreResult<Catalog> {
    Catalog::new(reference_products(count, seed))
}

fn flagship() -> Product {
    Product::new(
        ProductId(1),
        "Smartphone Pro Max",
        "Eletrônicos",
        "TechMaster",
        Money::from_cents(299_999),
        Rating::from_tenths(47),
    )
    .with_original_price(Money::from_cents(349_999))
    .with_image(PLACEHOLDER_IMAGE)
    .with_features(["5G", "Câmera Quádrupla", "Bateria 5000mAh"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_shape() {
        let catalog = reference_catalog(30, 42).unwrap();
        assert_eq!(catalog.len(), 31);

        let first = &catalog.products()[0];
        assert_eq!(first.id, ProductId(1));
        assert_eq!(first.name, "Smartphone Pro Max");

        let generic = &catalog.products()[1];
        assert_eq!(generic.id, ProductId(21));
        assert_eq!(generic.name, "Produto Genérico 1");
        assert_eq!(generic.category, "Eletrônicos");
        assert_eq!(catalog.products()[2].brand, "FashionTrend");
        assert_eq!(catalog.products()[30].id, ProductId(50));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(reference_products(30, 7), reference_products(30, 7));
        assert_ne!(reference_products(30, 7), reference_products(30, 8));
    }

    #[test]
    fn test_generated_values_in_range() {
        for p in reference_products(200, 1).iter().skip(1) {
            assert!(p.price >= Money::from_reais(50) && p.price < Money::from_reais(5050));
            assert!(p.original_price >= Money::from_reais(50));
            assert!(p.rating < Rating::MAX);
        }
    }

    #[test]
    fn test_facets_cover_all_categories() {
        let catalog = reference_catalog(3, 0).unwrap();
        assert_eq!(catalog.categories(), CATEGORIES);
        assert_eq!(catalog.brands(), BRANDS);
    }

    #[test]
    fn test_zero_count_keeps_flagship() {
        let catalog = reference_catalog(0, 0).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
