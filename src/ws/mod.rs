//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` carries the real-time side of the
//! gateway: clients subscribe to session or global events, join and
//! leave sessions, and broadcast presence and layout updates.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
