//! # Catalog Session
//!
//! The mutable view state behind one catalog page.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Host Event               Session Call            State Change          │
//! │  ──────────               ────────────            ────────────          │
//! │                                                                         │
//! │  Type in search ─────────► set_search() ────────► query.search          │
//! │  Pick category ──────────► set_category() ──────► query.filters         │
//! │  Pick sort ──────────────► set_sort() ──────────► query.sort            │
//! │                                   │                                     │
//! │                                   └──► recompute() ──► displayed        │
//! │                                                                         │
//! │  Click "Adicionar" ──────► add_to_cart() ───────► cart.push             │
//! │  Click ♥ ────────────────► toggle_favorite() ───► favorites ±           │
//! │  Click compare ──────────► toggle_compare() ────► compare ±             │
//! │  Click grid toggle ──────► toggle_grid_columns() ► grid_columns 5 ⇄ 3   │
//! │                                                                         │
//! │  Every call runs to completion before the next event.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use vitrine_core::{
    Cart, Catalog, CatalogQuery, FilterConfig, PriceRange, Product, ProductId, Rating,
    SortOption, ToggleSet, Toggled,
};

use crate::error::{SessionError, SessionResult};
use crate::state::SessionConfig;

/// Product grid width a fresh session starts with.
pub const WIDE_GRID_COLUMNS: u8 = 5;

/// Product grid width after one toggle.
pub const NARROW_GRID_COLUMNS: u8 = 3;

/// Badge counts shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub results: usize,
    pub cart: usize,
    pub favorites: usize,
    pub compare: usize,
}

/// State of one catalog page session.
///
/// ## Invariants
/// - `displayed` always equals `catalog.query(&query)` after any public call
/// - `last_evaluated` is the query `displayed` was computed from
#[derive(Debug)]
pub struct CatalogSession {
    catalog: Catalog,
    query: CatalogQuery,
    last_evaluated: Option<CatalogQuery>,
    displayed: Vec<Product>,
    cart: Cart,
    favorites: ToggleSet,
    compare: ToggleSet,
    grid_columns: u8,
    started_at: DateTime<Utc>,
}

impl CatalogSession {
    /// Starts a session with the default (unconstrained) query.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_filters(catalog, FilterConfig::default())
    }

    /// Starts a session with the configured default filters.
    pub fn from_config(catalog: Catalog, config: &SessionConfig) -> Self {
        Self::with_filters(catalog, config.default_filters())
    }

    fn with_filters(catalog: Catalog, filters: FilterConfig) -> Self {
        let mut session = CatalogSession {
            catalog,
            query: CatalogQuery::new(filters, SortOption::None, ""),
            last_evaluated: None,
            displayed: Vec::new(),
            cart: Cart::new(),
            favorites: ToggleSet::new(),
            compare: ToggleSet::new(),
            grid_columns: WIDE_GRID_COLUMNS,
            started_at: Utc::now(),
        };
        session.recompute();

        info!(
            products = session.catalog.len(),
            shown = session.displayed.len(),
            "Catalog session started"
        );
        session
    }

    // =========================================================================
    // Query setters
    // =========================================================================

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query.filters.category = category.into();
        self.recompute();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.query.filters.brand = brand.into();
        self.recompute();
    }

    /// Accepts inverted ranges; they simply display nothing.
    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.query.filters.price_range = price_range;
        self.recompute();
    }

    pub fn set_min_rating(&mut self, min_rating: Rating) {
        self.query.filters.min_rating = min_rating;
        self.recompute();
    }

    /// Replaces the whole filter configuration at once.
    pub fn set_filters(&mut self, filters: FilterConfig) {
        self.query.filters = filters;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.sort = sort;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.recompute();
    }

    /// Re-runs the query engine if the query changed since the last run.
    ///
    /// Returns `true` when the engine ran.
    pub fn recompute(&mut self) -> bool {
        if self.last_evaluated.as_ref() == Some(&self.query) {
            return false;
        }

        self.displayed = self
            .catalog
            .query(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.last_evaluated = Some(self.query.clone());

        debug!(
            category = %self.query.filters.category,
            brand = %self.query.filters.brand,
            sort = self.query.sort.as_str(),
            search = %self.query.search,
            shown = self.displayed.len(),
            "Catalog recomputed"
        );
        true
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Appends the product to the cart. Adding twice yields two entries.
    pub fn add_to_cart(&mut self, id: ProductId) -> SessionResult<()> {
        let product = self.lookup(id)?.clone();
        self.cart.add(product);
        debug!(%id, cart = self.cart.len(), "Added to cart");
        Ok(())
    }

    pub fn toggle_favorite(&mut self, id: ProductId) -> SessionResult<Toggled> {
        let product = self.lookup(id)?.clone();
        let outcome = self.favorites.toggle(product);
        debug!(%id, ?outcome, favorites = self.favorites.len(), "Favorite toggled");
        Ok(outcome)
    }

    pub fn toggle_compare(&mut self, id: ProductId) -> SessionResult<Toggled> {
        let product = self.lookup(id)?.clone();
        let outcome = self.compare.toggle(product);
        debug!(%id, ?outcome, compare = self.compare.len(), "Compare toggled");
        Ok(outcome)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn in_compare(&self, id: ProductId) -> bool {
        self.compare.contains(id)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Switches the grid between 5 and 3 columns. Does not touch the query.
    pub fn toggle_grid_columns(&mut self) -> u8 {
        self.grid_columns = if self.grid_columns == WIDE_GRID_COLUMNS {
            NARROW_GRID_COLUMNS
        } else {
            WIDE_GRID_COLUMNS
        };
        debug!(columns = self.grid_columns, "Grid columns toggled");
        self.grid_columns
    }

    pub fn grid_columns(&self) -> u8 {
        self.grid_columns
    }

    /// Caption of the grid toggle button for the current width.
    pub fn grid_toggle_label(&self) -> &'static str {
        if self.grid_columns == WIDE_GRID_COLUMNS {
            "Visualização Compacta"
        } else {
            "Visualização Expandida"
        }
    }

    fn lookup(&self, id: ProductId) -> SessionResult<&Product> {
        self.catalog.get(id).ok_or(SessionError::UnknownProduct(id))
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// The ordered list the page renders.
    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn result_count(&self) -> usize {
        self.displayed.len()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &ToggleSet {
        &self.favorites
    }

    pub fn compare(&self) -> &ToggleSet {
        &self.compare
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            results: self.displayed.len(),
            cart: self.cart.len(),
            favorites: self.favorites.len(),
            compare: self.compare.len(),
        }
    }
}
