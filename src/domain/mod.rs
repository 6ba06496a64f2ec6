//! Domain layer: identifiers, events, presence, and the event bus.
//!
//! This module contains the server-side domain model: typed entity
//! identifiers, stream platform detection, the domain event enum with
//! its delivery scopes, the broadcast event bus, and the in-memory
//! session presence table.

pub mod event;
pub mod event_bus;
pub mod ids;
pub mod platform;
pub mod presence;
pub mod source_kind;

pub use event::{EventScope, WallEvent};
pub use event_bus::EventBus;
pub use ids::{SessionId, SourceId, StreamId, UserId, ViewId};
pub use platform::StreamPlatform;
pub use presence::{PresenceStatus, PresenceTracker};
pub use source_kind::SourceKind;
