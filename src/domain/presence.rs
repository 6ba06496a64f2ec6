//! In-memory session presence table.
//!
//! [`PresenceTracker`] maps each session to the set of users currently
//! joined. The table is purely ephemeral: it is never persisted, never
//! reconciled against the database, and is lost on process restart.
//! Entries for empty sessions are removed eagerly so the map only holds
//! sessions with at least one active user.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::ids::{SessionId, UserId};

/// Per-user, per-session presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    /// User is connected and active in the session.
    Online,
    /// User is connected but idle or tabbed away.
    Away,
    /// User has left or disconnected.
    Offline,
}

impl PresenceStatus {
    /// Returns the status as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }

    /// Parses from a string, defaulting to `Online` for unknown input.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "away" => Self::Away,
            "offline" => Self::Offline,
            _ => Self::Online,
        }
    }
}

/// Tracks which users are currently active in which sessions.
///
/// # Concurrency
///
/// A single `RwLock` guards the whole table. Join/leave are short
/// map-and-set mutations, so contention is negligible at the scale of
/// one process.
#[derive(Debug, Default)]
pub struct PresenceTracker {
    active: RwLock<HashMap<SessionId, HashSet<UserId>>>,
}

impl PresenceTracker {
    /// Creates an empty presence tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user to a session's active set.
    ///
    /// Returns `true` if the user was not already present.
    pub async fn join(&self, session_id: SessionId, user_id: UserId) -> bool {
        let mut active = self.active.write().await;
        active.entry(session_id).or_default().insert(user_id)
    }

    /// Removes a user from a session's active set.
    ///
    /// Removing the last user deletes the session entry entirely.
    /// Returns `true` if the user was present. Unknown sessions or users
    /// are a no-op.
    pub async fn leave(&self, session_id: SessionId, user_id: UserId) -> bool {
        let mut active = self.active.write().await;
        let Some(users) = active.get_mut(&session_id) else {
            return false;
        };
        let removed = users.remove(&user_id);
        if users.is_empty() {
            active.remove(&session_id);
        }
        removed
    }

    /// Removes every trace of a session (e.g. after session deletion).
    pub async fn clear_session(&self, session_id: SessionId) {
        self.active.write().await.remove(&session_id);
    }

    /// Returns the users currently active in a session.
    pub async fn active_users(&self, session_id: SessionId) -> Vec<UserId> {
        self.active
            .read()
            .await
            .get(&session_id)
            .map(|users| users.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the number of users active in a session.
    pub async fn active_count(&self, session_id: SessionId) -> usize {
        self.active
            .read()
            .await
            .get(&session_id)
            .map_or(0, HashSet::len)
    }

    /// Returns `true` if the user is currently active in the session.
    pub async fn is_active(&self, session_id: SessionId, user_id: UserId) -> bool {
        self.active
            .read()
            .await
            .get(&session_id)
            .is_some_and(|users| users.contains(&user_id))
    }

    /// Returns the number of sessions with at least one active user.
    pub async fn session_count(&self) -> usize {
        self.active.read().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn join_and_leave() {
        let tracker = PresenceTracker::new();
        let session = SessionId::new();
        let user = UserId::new();

        assert!(tracker.join(session, user).await);
        assert!(tracker.is_active(session, user).await);
        assert_eq!(tracker.active_count(session).await, 1);

        assert!(tracker.leave(session, user).await);
        assert!(!tracker.is_active(session, user).await);
        assert_eq!(tracker.active_count(session).await, 0);
    }

    #[tokio::test]
    async fn duplicate_join_is_idempotent() {
        let tracker = PresenceTracker::new();
        let session = SessionId::new();
        let user = UserId::new();

        assert!(tracker.join(session, user).await);
        assert!(!tracker.join(session, user).await);
        assert_eq!(tracker.active_count(session).await, 1);
    }

    #[tokio::test]
    async fn leave_unknown_is_noop() {
        let tracker = PresenceTracker::new();
        assert!(!tracker.leave(SessionId::new(), UserId::new()).await);
    }

    #[tokio::test]
    async fn empty_session_entry_is_removed() {
        let tracker = PresenceTracker::new();
        let session = SessionId::new();
        let user = UserId::new();

        tracker.join(session, user).await;
        assert_eq!(tracker.session_count().await, 1);

        tracker.leave(session, user).await;
        assert_eq!(tracker.session_count().await, 0);
    }

    #[tokio::test]
    async fn tracks_multiple_users_per_session() {
        let tracker = PresenceTracker::new();
        let session = SessionId::new();
        let alice = UserId::new();
        let bob = UserId::new();

        tracker.join(session, alice).await;
        tracker.join(session, bob).await;

        let users = tracker.active_users(session).await;
        assert_eq!(users.len(), 2);
        assert!(users.contains(&alice));
        assert!(users.contains(&bob));

        tracker.leave(session, alice).await;
        assert_eq!(tracker.active_users(session).await, vec![bob]);
    }

    #[tokio::test]
    async fn clear_session_drops_all_users() {
        let tracker = PresenceTracker::new();
        let session = SessionId::new();
        tracker.join(session, UserId::new()).await;
        tracker.join(session, UserId::new()).await;

        tracker.clear_session(session).await;
        assert_eq!(tracker.active_count(session).await, 0);
        assert_eq!(tracker.session_count().await, 0);
    }

    #[test]
    fn presence_status_round_trip() {
        assert_eq!(PresenceStatus::from_str_or_default("away"), PresenceStatus::Away);
        assert_eq!(
            PresenceStatus::from_str_or_default("OFFLINE"),
            PresenceStatus::Offline
        );
        assert_eq!(
            PresenceStatus::from_str_or_default("anything"),
            PresenceStatus::Online
        );
        assert_eq!(PresenceStatus::Away.as_str(), "away");
    }
}
