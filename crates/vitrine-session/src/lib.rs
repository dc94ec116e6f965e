//! # Vitrine Session Library
//!
//! Host-facing state for the Vitrine catalog page.
//!
//! ## Module Organization
//! ```text
//! vitrine_session/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── CatalogSession (query, displayed list, selections)
//! │   └── config.rs   ◄─── SessionConfig (environment + defaults)
//! ├── fixtures.rs     ◄─── Seeded reference catalog
//! ├── error.rs        ◄─── SessionError / ConfigError
//! └── bin/catalog.rs  ◄─── CLI over a reference session
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::{ProductId, SortOption};
//! use vitrine_session::fixtures::reference_catalog;
//! use vitrine_session::state::{CatalogSession, SessionConfig};
//!
//! let config = SessionConfig::default();
//! let catalog = reference_catalog(config.seed_count, config.seed).unwrap();
//! let mut session = CatalogSession::from_config(catalog, &config);
//!
//! session.set_category("Moda");
//! session.set_sort(SortOption::PriceAscending);
//! session.toggle_favorite(ProductId(1)).unwrap();
//!
//! assert!(session.displayed().iter().all(|p| p.category == "Moda"));
//! assert_eq!(session.summary().favorites, 1);
//! ```

pub mod error;
pub mod fixtures;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ConfigError, SessionError, SessionResult};
pub use state::{CatalogSession, SessionConfig, SessionSummary};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vitrine_session=trace` - Trace for the session crate only
/// - Default: INFO, with DEBUG for vitrine crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine_session=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
