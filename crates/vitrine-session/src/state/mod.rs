//! # State Module
//!
//! View state for a catalog page session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐          ┌──────────────────────────────────┐    │
//! │  │  SessionConfig   │          │        CatalogSession            │    │
//! │  │                  │ ───────► │                                  │    │
//! │  │  currency        │ defaults │  catalog (immutable)             │    │
//! │  │  price ceiling   │          │  query ──► displayed             │    │
//! │  │  seed settings   │          │  cart / favorites / compare      │    │
//! │  │                  │          │  grid columns                    │    │
//! │  └──────────────────┘          └──────────────────────────────────┘    │
//! │                                                                         │
//! │  Single-threaded: the host owns the session and calls it one event     │
//! │  at a time. Config is read-only after loading.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{SessionConfig, DEFAULT_SEED, DEFAULT_SEED_COUNT};
pub use session::{CatalogSession, SessionSummary, NARROW_GRID_COLUMNS, WIDE_GRID_COLUMNS};
