//! # Selection Sets
//!
//! The cart, favorites and compare lists.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Set Operations                             │
//! │                                                                         │
//! │  Set          Operation       Duplicates    Membership                  │
//! │  ───          ─────────       ──────────    ──────────                  │
//! │                                                                         │
//! │  Cart         add()           allowed       count per id                │
//! │               (append only)   (2 clicks = 2 entries)                    │
//! │                                                                         │
//! │  Favorites    toggle()        never         by id                       │
//! │  Compare      toggle()        never         by id                       │
//! │               (present → remove, absent → append)                       │
//! │                                                                         │
//! │  toggle(toggle(set, p), p) == set                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are snapshots of the product record. Membership only ever compares
//! `Product::id`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an append-only, insertion-ordered sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends `product`, even if it is already in the cart.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Entries in the order they were added.
    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries (the cart badge).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many entries refer to `id`.
    pub fn count_of(&self, id: ProductId) -> usize {
        self.items.iter().filter(|p| p.id == id).count()
    }

    /// Sum of the selling prices of every entry.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|p| p.price).sum()
    }

    /// Sum of the savings against list prices.
    pub fn savings(&self) -> Money {
        self.items.iter().map(Product::savings).sum()
    }
}

// =============================================================================
// Toggle Set
// =============================================================================

/// Outcome of a [`ToggleSet::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Toggled {
    Added,
    Removed,
}

/// An insertion-ordered set of products keyed by id.
///
/// Used for favorites and the compare list. `toggle` is the only mutation.
///
/// Equality is set equality over ids; insertion order is not compared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToggleSet {
    items: Vec<Product>,
}

impl ToggleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        ToggleSet::default()
    }

    /// Removes the product with the same id if present, otherwise appends it.
    ///
    /// ```rust
    /// use vitrine_core::money::Money;
    /// use vitrine_core::selection::{ToggleSet, Toggled};
    /// use vitrine_core::types::{Product, ProductId, Rating};
    ///
    /// let p = Product::new(ProductId(1), "Phone A", "Eletrônicos", "TechMaster",
    ///     Money::from_reais(100), Rating::from_tenths(45));
    ///
    /// let mut favorites = ToggleSet::new();
    /// assert_eq!(favorites.toggle(p.clone()), Toggled::Added);
    /// assert!(favorites.contains(ProductId(1)));
    /// assert_eq!(favorites.toggle(p), Toggled::Removed);
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, product: Product) -> Toggled {
        match self.items.iter().position(|p| p.id == product.id) {
            Some(index) => {
                self.items.remove(index);
                Toggled::Removed
            }
            None => {
                self.items.push(product);
                Toggled::Added
            }
        }
    }

    /// Checks membership by id.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Members in insertion order.
    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PartialEq for ToggleSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p.id))
    }
}

impl Eq for ToggleSet {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn product(id: u32, reais: i64) -> Product {
        Product::new(
            ProductId(id),
            format!("Produto {}", id),
            "Casa",
            "HomeStyle",
            Money::from_reais(reais),
            Rating::from_tenths(30),
        )
    }

    #[test]
    fn test_cart_allows_duplicates() {
        let mut cart = Cart::new();
        cart.add(product(1, 10));
        cart.add(product(1, 10));
        cart.add(product(2, 5));

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.count_of(ProductId(1)), 2);
        assert_eq!(cart.count_of(ProductId(3)), 0);
        assert_eq!(cart.subtotal(), Money::from_reais(25));
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(3, 1));
        cart.add(product(1, 1));
        cart.add(product(3, 1));

        let ids: Vec<_> = cart.items().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [3, 1, 3]);
    }

    #[test]
    fn test_cart_savings() {
        let mut cart = Cart::new();
        cart.add(product(1, 80).with_original_price(Money::from_reais(100)));
        cart.add(product(2, 80).with_original_price(Money::from_reais(50)));
        assert_eq!(cart.savings(), Money::from_reais(20));
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = ToggleSet::new();
        assert_eq!(set.toggle(product(1, 10)), Toggled::Added);
        assert_eq!(set.toggle(product(2, 10)), Toggled::Added);
        assert_eq!(set.len(), 2);

        assert_eq!(set.toggle(product(1, 10)), Toggled::Removed);
        assert!(!set.contains(ProductId(1)));
        assert!(set.contains(ProductId(2)));
    }

    #[test]
    fn test_toggle_matches_by_id_not_structure() {
        let mut set = ToggleSet::new();
        set.toggle(product(1, 10));

        // Same id, different price: still treated as the same product.
        assert_eq!(set.toggle(product(1, 999)), Toggled::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = ToggleSet::new();
        a.toggle(product(1, 1));
        a.toggle(product(2, 1));

        let mut b = ToggleSet::new();
        b.toggle(product(2, 1));
        b.toggle(product(1, 1));

        assert_eq!(a, b);
        b.toggle(product(3, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_removal_keeps_remaining_order() {
        let mut set = ToggleSet::new();
        for id in [4, 2, 9] {
            set.toggle(product(id, 1));
        }
        set.toggle(product(2, 1));
        set.toggle(product(2, 1));

        let ids: Vec<_> = set.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [4, 9, 2]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: toggling the same product twice restores the set.
            #[test]
            fn double_toggle_is_identity(
                members in prop::collection::btree_set(0u32..50, 0..20),
                id in 0u32..60,
            ) {
                let mut set = ToggleSet::new();
                for m in &members {
                    set.toggle(product(*m, 10));
                }
                let before = set.clone();

                set.toggle(product(id, 10));
                set.toggle(product(id, 10));

                prop_assert_eq!(set, before);
            }

            /// Property: a toggle set never holds two entries with one id.
            #[test]
            fn toggle_set_has_unique_ids(ids in prop::collection::vec(0u32..10, 0..40)) {
                let mut set = ToggleSet::new();
                for id in ids {
                    set.toggle(product(id, 10));
                }
                let mut seen: Vec<u32> = set.iter().map(|p| p.id.0).collect();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), set.len());
            }
        }
    }
}
