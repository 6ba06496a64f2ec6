//! WebSocket message types: envelope and commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PresenceStatus;

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp.
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    pub payload: serde_json::Value,
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send over WebSocket.
///
/// Carried in the `payload` of a [`WsMessageType::Command`] envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Subscribe to events for specific sessions. Use `["*"]` for all
    /// sessions.
    Subscribe {
        /// Session IDs to subscribe to.
        session_ids: Vec<String>,
    },
    /// Unsubscribe from events for specific sessions. `["*"]` clears
    /// the wildcard.
    Unsubscribe {
        /// Session IDs to unsubscribe from.
        session_ids: Vec<String>,
    },
    /// Subscribe to global events: the stream catalog, session
    /// lifecycle, and source syncs.
    SubscribeGlobal,
    /// Unsubscribe from global events.
    UnsubscribeGlobal,
    /// Enter a session. Implicitly subscribes to its events; the
    /// departure is announced when the connection drops.
    Join {
        /// Session to enter.
        session_id: Uuid,
        /// The joining user.
        user_id: Uuid,
    },
    /// Leave a session.
    Leave {
        /// Session to leave.
        session_id: Uuid,
        /// The departing user.
        user_id: Uuid,
    },
    /// Broadcast a presence status change.
    Presence {
        /// Session in question.
        session_id: Uuid,
        /// The user whose status changed.
        user_id: Uuid,
        /// The new status.
        status: PresenceStatus,
    },
    /// Broadcast a transient grid layout update.
    Layout {
        /// Session in question.
        session_id: Uuid,
        /// Opaque layout payload, forwarded verbatim.
        layout: serde_json::Value,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn command_parses_from_payload() {
        let payload = serde_json::json!({
            "command": "subscribe",
            "session_ids": ["*"],
        });
        let Ok(WsCommand::Subscribe { session_ids }) = serde_json::from_value(payload) else {
            panic!("expected Subscribe");
        };
        assert_eq!(session_ids, vec!["*".to_string()]);
    }

    #[test]
    fn join_command_parses() {
        let payload = serde_json::json!({
            "command": "join",
            "session_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
        });
        let Ok(WsCommand::Join { .. }) = serde_json::from_value(payload) else {
            panic!("expected Join");
        };
    }

    #[test]
    fn unknown_command_is_rejected() {
        let payload = serde_json::json!({"command": "teleport"});
        let parsed: Result<WsCommand, _> = serde_json::from_value(payload);
        assert!(parsed.is_err());
    }
}
