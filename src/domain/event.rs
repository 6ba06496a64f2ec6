//! Domain events reflecting catalog and session state changes.
//!
//! Every mutation publishes a [`WallEvent`] through the [`super::EventBus`].
//! Events are broadcast to WebSocket subscribers, which filter them by
//! [`EventScope`]: catalog and session-lifecycle events are global, while
//! collaboration events are scoped to a single session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::{SessionId, SourceId, StreamId, UserId, ViewId};
use super::platform::StreamPlatform;
use super::presence::PresenceStatus;

/// Delivery scope of a [`WallEvent`].
///
/// Replaces the dynamic per-session topic strings of a string-keyed
/// pub/sub registry: a single broadcast channel carries every event and
/// subscribers demultiplex on the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// Catalog and session-lifecycle events, visible to every subscriber.
    Global,
    /// Collaboration events for one session.
    Session(SessionId),
}

/// Domain event emitted after every state mutation.
///
/// Events are fire-and-forget: no durability, no ordering guarantee
/// beyond publish order, and no delivery to subscribers that connect
/// later.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum WallEvent {
    /// A stream entered the catalog (manual creation or source sync).
    StreamAdded {
        /// Stream identifier.
        stream_id: StreamId,
        /// Stream title.
        title: String,
        /// Detected platform.
        platform: StreamPlatform,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Stream metadata changed.
    StreamUpdated {
        /// Stream identifier.
        stream_id: StreamId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A stream was removed from the catalog.
    StreamRemoved {
        /// Stream identifier.
        stream_id: StreamId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A stream's live flag flipped.
    StreamLiveChanged {
        /// Stream identifier.
        stream_id: StreamId,
        /// New live status.
        is_live: bool,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A new session was created.
    SessionCreated {
        /// Session identifier.
        session_id: SessionId,
        /// Session name.
        name: String,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Session settings changed (name, description, grid size, visibility).
    SessionUpdated {
        /// Session identifier.
        session_id: SessionId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A session was deleted.
    SessionDeleted {
        /// Session identifier.
        session_id: SessionId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// The set of sessions changed; clients should re-fetch the list.
    ActiveSessionsChanged {
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A data source finished syncing the catalog.
    SourceSynced {
        /// Source identifier.
        source_id: SourceId,
        /// Number of streams the source now contributes.
        stream_count: usize,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A view within a session was created, moved, reconfigured, or
    /// deleted.
    ViewChanged {
        /// Owning session.
        session_id: SessionId,
        /// Affected view.
        view_id: ViewId,
        /// Whether the view still exists after the change.
        deleted: bool,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A transient grid layout update, broadcast without persistence.
    GridLayoutChanged {
        /// Owning session.
        session_id: SessionId,
        /// Opaque layout payload forwarded verbatim to subscribers.
        layout: serde_json::Value,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A user joined a session.
    UserJoined {
        /// Session the user joined.
        session_id: SessionId,
        /// Joining user.
        user_id: UserId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A user left a session.
    UserLeft {
        /// Session the user left.
        session_id: SessionId,
        /// Leaving user.
        user_id: UserId,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// A user's presence status changed within a session.
    PresenceChanged {
        /// Session scope of the presence change.
        session_id: SessionId,
        /// Affected user.
        user_id: UserId,
        /// New presence status.
        status: PresenceStatus,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl WallEvent {
    /// Returns the delivery scope of this event.
    #[must_use]
    pub fn scope(&self) -> EventScope {
        match self {
            Self::StreamAdded { .. }
            | Self::StreamUpdated { .. }
            | Self::StreamRemoved { .. }
            | Self::StreamLiveChanged { .. }
            | Self::SessionCreated { .. }
            | Self::SessionDeleted { .. }
            | Self::ActiveSessionsChanged { .. }
            | Self::SourceSynced { .. } => EventScope::Global,
            Self::SessionUpdated { session_id, .. }
            | Self::ViewChanged { session_id, .. }
            | Self::GridLayoutChanged { session_id, .. }
            | Self::UserJoined { session_id, .. }
            | Self::UserLeft { session_id, .. }
            | Self::PresenceChanged { session_id, .. } => EventScope::Session(*session_id),
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::StreamAdded { .. } => "stream_added",
            Self::StreamUpdated { .. } => "stream_updated",
            Self::StreamRemoved { .. } => "stream_removed",
            Self::StreamLiveChanged { .. } => "stream_live_changed",
            Self::SessionCreated { .. } => "session_created",
            Self::SessionUpdated { .. } => "session_updated",
            Self::SessionDeleted { .. } => "session_deleted",
            Self::ActiveSessionsChanged { .. } => "active_sessions_changed",
            Self::SourceSynced { .. } => "source_synced",
            Self::ViewChanged { .. } => "view_changed",
            Self::GridLayoutChanged { .. } => "grid_layout_changed",
            Self::UserJoined { .. } => "user_joined",
            Self::UserLeft { .. } => "user_left",
            Self::PresenceChanged { .. } => "presence_changed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn catalog_events_are_global() {
        let event = WallEvent::StreamAdded {
            stream_id: StreamId::new(),
            title: "City Hall Cam".to_string(),
            platform: StreamPlatform::Youtube,
            timestamp: Utc::now(),
        };
        assert_eq!(event.scope(), EventScope::Global);
    }

    #[test]
    fn collaboration_events_carry_session_scope() {
        let session_id = SessionId::new();
        let event = WallEvent::UserJoined {
            session_id,
            user_id: UserId::new(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.scope(), EventScope::Session(session_id));
    }

    #[test]
    fn session_lifecycle_is_global() {
        // Creation/deletion is announced globally; only updates to an
        // existing session are scoped to its subscribers.
        let session_id = SessionId::new();
        let created = WallEvent::SessionCreated {
            session_id,
            name: "Election Night".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(created.scope(), EventScope::Global);

        let updated = WallEvent::SessionUpdated {
            session_id,
            timestamp: Utc::now(),
        };
        assert_eq!(updated.scope(), EventScope::Session(session_id));
    }

    #[test]
    fn serializes_with_event_type_tag() {
        let event = WallEvent::PresenceChanged {
            session_id: SessionId::new(),
            user_id: UserId::new(),
            status: PresenceStatus::Away,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event);
        let Ok(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("presence_changed"));
        assert!(json.contains("away"));
    }

    #[test]
    fn event_type_str_matches_serde_tag() {
        let event = WallEvent::GridLayoutChanged {
            session_id: SessionId::new(),
            layout: serde_json::json!({"cells": []}),
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "grid_layout_changed");
    }
}
