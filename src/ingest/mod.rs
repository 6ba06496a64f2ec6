//! Data-source ingestion: normalization of raw entries and background
//! polling of TOML files and JSON endpoints.

pub mod normalize;
pub mod runner;

pub use runner::{CreateSource, IngestManager};
