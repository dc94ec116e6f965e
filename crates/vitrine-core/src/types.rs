//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  FilterConfig   │   │   SortOption    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  category       │   │  None           │       │
//! │  │  name           │   │  price_range    │   │  PriceAscending │       │
//! │  │  category/brand │   │  brand          │   │  PriceDescending│       │
//! │  │  price (Money)  │   │  min_rating     │   │  RatingDesc...  │       │
//! │  │  rating         │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │     Rating      │   │   PriceRange    │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  tenths (u8)    │   │  min..=max      │                              │
//! │  │  47 = 4.7 ★     │   │  (Money)        │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `Product::id` is the only identity. Selection sets compare ids, never the
//! whole record.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::DEFAULT_PRICE_CEILING_CENTS;

// =============================================================================
// Product Id
// =============================================================================

/// Unique product identifier within a catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A product rating on the 0-5 star scale, stored in tenths.
///
/// Ratings are shown with one decimal ("4.7"), so tenths are the natural
/// resolution. Integer storage keeps `>=` comparisons against the minimum
/// rating filter exact. On the wire a rating is a decimal number of stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// Highest representable rating (5.0 stars).
    pub const MAX: Rating = Rating(50);

    /// Creates a rating from tenths of a star, clamped to 5.0.
    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > Self::MAX.0 {
            Self::MAX
        } else {
            Rating(tenths)
        }
    }

    /// Creates a rating from a decimal score, rounded to the nearest tenth
    /// and clamped to [0, 5].
    ///
    /// Suitable for product ratings. For a minimum-rating bound use
    /// [`Rating::at_least`].
    ///
    /// ```rust
    /// use vitrine_core::types::Rating;
    ///
    /// assert_eq!(Rating::from_score(4.7).tenths(), 47);
    /// assert_eq!(Rating::from_score(9.0), Rating::MAX);
    /// assert_eq!(Rating::from_score(-1.0).tenths(), 0);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Rating(0);
        }
        let tenths = (score * 10.0).round().clamp(0.0, Self::MAX.0 as f64);
        Rating(tenths as u8)
    }

    /// Converts a decimal lower bound into the smallest rating that is not
    /// below it.
    ///
    /// Rounds up to the next tenth, so `rating >= Rating::at_least(x)` holds
    /// exactly when the rating is at least `x` stars. A bound above 5.0 stays
    /// above every valid rating. Negative and NaN bounds become 0.
    ///
    /// ```rust
    /// use vitrine_core::types::Rating;
    ///
    /// assert_eq!(Rating::at_least(4.2).tenths(), 42);
    /// assert_eq!(Rating::at_least(4.24).tenths(), 43);
    /// assert!(Rating::at_least(5.01) > Rating::MAX);
    /// ```
    pub fn at_least(score: f64) -> Self {
        if score.is_nan() {
            return Rating(0);
        }
        // 4.2 * 10.0 is 42.00000000000001; the epsilon keeps it at 42.
        let tenths = (score * 10.0 - 1e-9).ceil().clamp(0.0, u8::MAX as f64);
        Rating(tenths as u8)
    }

    /// Parses a decimal score such as `"4.7"` or `"5"`.
    ///
    /// At most one fractional digit is accepted. The result is not clamped,
    /// so out-of-range data reaches validation.
    pub fn parse_decimal(input: &str) -> Option<Rating> {
        let input = input.trim();
        let (whole, frac) = match input.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (input, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 1 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: u8 = whole.parse().ok()?;
        let frac: u8 = if frac.is_empty() { 0 } else { frac.parse().ok()? };

        whole.checked_mul(10).and_then(|v| v.checked_add(frac)).map(Rating)
    }

    /// Returns the rating in tenths of a star.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating as a decimal score (for display only).
    #[inline]
    pub fn score(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.score())
    }
}

struct RatingVisitor;

impl<'de> Visitor<'de> for RatingVisitor {
    type Value = Rating;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a star rating with at most one decimal place")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rating, E> {
        u8::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(10))
            .map(Rating)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rating, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Rating, E> {
        // Shortest round-trip formatting: 4.7 prints as "4.7".
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        Rating::parse_decimal(&v.to_string())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rating, E> {
        Rating::parse_decimal(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RatingVisitor)
    }
}

/// Decodes a minimum-rating bound, rounding finer values up.
fn deserialize_min_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rating, D::Error> {
    f64::deserialize(deserializer).map(Rating::at_least)
}

// =============================================================================
// Product
// =============================================================================

/// A product shown in the catalog. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name; the search box matches against it.
    pub name: String,

    /// Category (open enumeration: "Eletrônicos", "Moda", "Casa", ...).
    pub category: String,

    /// Brand name.
    pub brand: String,

    /// Current selling price, in reais on the wire.
    #[ts(type = "number")]
    pub price: Money,

    /// List price before discount.
    #[ts(type = "number")]
    pub original_price: Money,

    /// Average customer rating, 0.0 - 5.0 stars.
    #[ts(type = "number")]
    pub rating: Rating,

    /// Opaque image reference, passed through to the host.
    pub image: String,

    /// Ordered feature highlights.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Creates a product with the list price equal to the selling price, no
    /// image and no features.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        rating: Rating,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
            original_price: price,
            rating,
            image: String::new(),
            features: Vec::new(),
        }
    }

    /// Sets the list price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = original_price;
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the feature highlights.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Amount saved against the list price, never negative.
    ///
    /// Generated data can carry a list price below the selling price; the
    /// card then shows no saving at all.
    #[inline]
    pub fn savings(&self) -> Money {
        self.original_price.saturating_sub(self.price)
    }

    /// Discount against the list price in whole percent.
    ///
    /// ```rust
    /// use vitrine_core::money::Money;
    /// use vitrine_core::types::{Product, ProductId, Rating};
    ///
    /// let phone = Product::new(ProductId(1), "Smartphone Pro Max", "Eletrônicos",
    ///         "TechMaster", Money::from_cents(299_999), Rating::from_tenths(47))
    ///     .with_original_price(Money::from_cents(349_999));
    ///
    /// assert_eq!(phone.discount_percent(), 14);
    /// ```
    pub fn discount_percent(&self) -> u32 {
        self.savings().percent_of(self.original_price)
    }

    /// The first `count` features, as shown on a product card.
    pub fn headline_features(&self, count: usize) -> &[String] {
        &self.features[..count.min(self.features.len())]
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price interval `[min, max]`.
///
/// A range with `min > max` is accepted as-is and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    #[ts(type = "number")]
    pub min: Money,
    #[ts(type = "number")]
    pub max: Money,
}

impl PriceRange {
    /// Creates a range without reordering the bounds.
    #[inline]
    pub const fn new(min: Money, max: Money) -> Self {
        PriceRange { min, max }
    }

    /// Checks whether `price` lies within both bounds.
    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }

    /// True when no price can satisfy both bounds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    /// R$ 0,00 to R$ 5.000,00.
    fn default() -> Self {
        PriceRange::new(
            Money::zero(),
            Money::from_cents(DEFAULT_PRICE_CEILING_CENTS),
        )
    }
}

// =============================================================================
// Filter Configuration
// =============================================================================

/// Active constraints narrowing the catalog to the displayed subset.
///
/// Empty `category` / `brand` strings mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Exact, case-sensitive category match; empty matches all.
    #[serde(default)]
    pub category: String,

    /// Inclusive price bounds.
    #[serde(default)]
    pub price_range: PriceRange,

    /// Exact, case-sensitive brand match; empty matches all.
    #[serde(default)]
    pub brand: String,

    /// Inclusive lower bound on rating. Decimal bounds finer than a tenth
    /// are rounded up when decoded.
    #[serde(default, deserialize_with = "deserialize_min_rating")]
    #[ts(type = "number")]
    pub min_rating: Rating,
}

impl FilterConfig {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Rating) -> Self {
        self.min_rating = min_rating;
        self
    }
}

// =============================================================================
// Sort Option
// =============================================================================

/// Ordering applied after filtering.
///
/// Serialized with the option values of the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortOption {
    /// Keep catalog order.
    #[default]
    #[serde(rename = "")]
    None,
    /// Cheapest first.
    #[serde(rename = "priceAsc")]
    PriceAscending,
    /// Most expensive first.
    #[serde(rename = "priceDesc")]
    PriceDescending,
    /// Best rated first.
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortOption {
    /// Every option, in dropdown order.
    pub const ALL: [SortOption; 4] = [
        SortOption::None,
        SortOption::PriceAscending,
        SortOption::PriceDescending,
        SortOption::RatingDescending,
    ];

    /// The dropdown value for this option.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::PriceAscending => "priceAsc",
            SortOption::PriceDescending => "priceDesc",
            SortOption::RatingDescending => "rating",
        }
    }
}

impl FromStr for SortOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortOption::None),
            "priceAsc" => Ok(SortOption::PriceAscending),
            "priceDesc" => Ok(SortOption::PriceDescending),
            "rating" => Ok(SortOption::RatingDescending),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortOption::ALL
                    .iter()
                    .map(|o| o.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::new(
            ProductId(1),
            "Smartphone Pro Max",
            "Eletrônicos",
            "TechMaster",
            Money::from_cents(299_999),
            Rating::from_tenths(47),
        )
        .with_original_price(Money::from_cents(349_999))
        .with_features(["5G", "Câmera Quádrupla", "Bateria 5000mAh"])
    }

    #[test]
    fn test_rating_from_tenths_clamps() {
        assert_eq!(Rating::from_tenths(47).tenths(), 47);
        assert_eq!(Rating::from_tenths(200), Rating::MAX);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::from_tenths(47).to_string(), "4.7");
        assert_eq!(Rating::from_tenths(30).to_string(), "3.0");
        assert_eq!(Rating::default().to_string(), "0.0");
    }

    #[test]
    fn test_rating_score() {
        assert!((Rating::from_tenths(45).score() - 4.5).abs() < 1e-9);
        assert_eq!(Rating::from_score(f64::NAN).tenths(), 0);
    }

    #[test]
    fn test_product_savings_and_discount() {
        let p = phone();
        assert_eq!(p.savings().cents(), 50_000);
        assert_eq!(p.discount_percent(), 14);
    }

    #[test]
    fn test_list_price_below_price_has_no_savings() {
        let p = phone().with_original_price(Money::from_cents(100));
        assert!(p.savings().is_zero());
        assert_eq!(p.discount_percent(), 0);
    }

    #[test]
    fn test_headline_features() {
        let p = phone();
        assert_eq!(p.headline_features(2), ["5G", "Câmera Quádrupla"]);
        assert_eq!(p.headline_features(10).len(), 3);
        assert!(p.clone().with_features(Vec::<String>::new()).headline_features(2).is_empty());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(Money::from_cents(100), Money::from_cents(200));
        assert!(range.contains(Money::from_cents(100)));
        assert!(range.contains(Money::from_cents(200)));
        assert!(!range.contains(Money::from_cents(99)));
        assert!(!range.contains(Money::from_cents(201)));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_degenerate_price_range_matches_nothing() {
        let range = PriceRange::new(Money::from_reais(100), Money::from_reais(10));
        assert!(range.is_empty());
        assert!(!range.contains(Money::from_reais(50)));
        assert!(!range.contains(Money::from_reais(100)));
        assert!(!range.contains(Money::from_reais(10)));
    }

    #[test]
    fn test_default_filters() {
        let filters = FilterConfig::default();
        assert!(filters.category.is_empty());
        assert!(filters.brand.is_empty());
        assert_eq!(filters.price_range.max, Money::from_reais(5_000));
        assert_eq!(filters.min_rating, Rating::default());
    }

    #[test]
    fn test_sort_option_round_trips_dropdown_values() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!("none".parse::<SortOption>().unwrap(), SortOption::None);
        assert!("cheapest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_sort_option_serializes_as_dropdown_value() {
        let json = serde_json::to_string(&SortOption::PriceDescending).unwrap();
        assert_eq!(json, "\"priceDesc\"");

        let parsed: SortOption = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, SortOption::None);
    }

    #[test]
    fn test_product_json_uses_camel_case_and_decimals() {
        let json = serde_json::to_value(phone()).unwrap();
        assert_eq!(json["originalPrice"], 3499.99);
        assert_eq!(json["price"], 2999.99);
        assert_eq!(json["rating"], 4.7);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_product_json_decimals_round_trip() {
        let p = phone();
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_rating_at_least_rounds_up() {
        assert_eq!(Rating::at_least(4.2).tenths(), 42);
        assert_eq!(Rating::at_least(4.24).tenths(), 43);
        assert_eq!(Rating::at_least(4.7).tenths(), 47);
        assert_eq!(Rating::at_least(0.0).tenths(), 0);
        assert_eq!(Rating::at_least(-2.0).tenths(), 0);
        assert_eq!(Rating::at_least(f64::NAN).tenths(), 0);
        assert!(Rating::at_least(5.01) > Rating::MAX);
    }

    #[test]
    fn test_min_rating_bound_excludes_lower_product() {
        let product = phone();
        let rated_4_2 = Product {
            rating: Rating::from_tenths(42),
            ..product
        };

        assert!(rated_4_2.rating < Rating::at_least(4.24));
        assert!(rated_4_2.rating >= Rating::at_least(4.2));
    }

    #[test]
    fn test_rating_parse_decimal() {
        assert_eq!(Rating::parse_decimal("4.7"), Some(Rating::from_tenths(47)));
        assert_eq!(Rating::parse_decimal("5"), Some(Rating::MAX));
        assert_eq!(Rating::parse_decimal("4.75"), None);
        assert_eq!(Rating::parse_decimal("-1"), None);
        assert_eq!(Rating::parse_decimal("5.1").map(|r| r.tenths()), Some(51));
    }

    #[test]
    fn test_rating_json_is_decimal_stars() {
        assert_eq!(serde_json::to_string(&Rating::from_tenths(47)).unwrap(), "4.7");
        assert_eq!(serde_json::from_str::<Rating>("4.7").unwrap().tenths(), 47);
        assert_eq!(serde_json::from_str::<Rating>("3").unwrap().tenths(), 30);
        assert!(serde_json::from_str::<Rating>("4.25").is_err());
        assert!(serde_json::from_str::<Rating>("-1").is_err());
    }

    #[test]
    fn test_filter_json_rounds_min_rating_up() {
        let filters: FilterConfig = serde_json::from_str(
            r#"{"category": "Moda", "priceRange": {"min": 0, "max": 2999.99}, "minRating": 4.24}"#,
        )
        .unwrap();

        assert_eq!(filters.category, "Moda");
        assert_eq!(filters.price_range.max, Money::from_cents(299_999));
        assert_eq!(filters.min_rating.tenths(), 43);

        let empty: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FilterConfig::default());
    }
}
