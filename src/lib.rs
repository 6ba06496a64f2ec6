//! # streamwall-gateway
//!
//! Backend for a multi-stream viewing wall: a catalog of live streams,
//! sessions that arrange them into grids, data sources that keep the
//! catalog fresh, and a real-time collaboration layer so several people
//! can watch and rearrange the same wall together.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── StreamService / SessionService (service/)
//!     ├── IngestManager (ingest/)
//!     │
//!     ├── EventBus + PresenceTracker (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```
//!
//! Sessions, views, streams, and sources are persisted; presence and
//! grid layout broadcasts are ephemeral and live only in process
//! memory and on the wire.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod persistence;
pub mod service;
pub mod ws;
