//! Persistence layer: PostgreSQL storage for the stream catalog,
//! sessions, views, and data sources.
//!
//! Presence and grid-layout broadcasts are deliberately *not* persisted;
//! only the entities above survive a restart.

pub mod models;
pub mod postgres;

pub use postgres::Store;
