//! Per-connection subscription filter.
//!
//! Tracks which event scopes a WebSocket client receives. Sessions the
//! client has joined are implicitly subscribed for as long as the
//! membership lasts.

use std::collections::HashSet;

use crate::domain::{EventScope, SessionId};

/// Filters events for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionFilter {
    /// Explicitly subscribed sessions. Ignored when `all_sessions` is
    /// set.
    session_ids: HashSet<SessionId>,
    /// Wildcard (`"*"`) subscription to every session.
    all_sessions: bool,
    /// Whether global events (catalog, session lifecycle, source syncs)
    /// are delivered.
    global: bool,
    /// Sessions the client joined; subscribed implicitly.
    joined: HashSet<SessionId>,
}

impl SubscriptionFilter {
    /// Creates a filter that matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds sessions to the subscription set. `wildcard` enables the
    /// match-everything mode.
    pub fn subscribe(&mut self, ids: &[SessionId], wildcard: bool) {
        if wildcard {
            self.all_sessions = true;
        }
        for id in ids {
            self.session_ids.insert(*id);
        }
    }

    /// Removes sessions from the subscription set. `wildcard` clears
    /// the match-everything mode.
    pub fn unsubscribe(&mut self, ids: &[SessionId], wildcard: bool) {
        if wildcard {
            self.all_sessions = false;
        }
        for id in ids {
            self.session_ids.remove(id);
        }
    }

    /// Turns global event delivery on or off.
    pub fn set_global(&mut self, enabled: bool) {
        self.global = enabled;
    }

    /// Records a session join; its events flow until [`Self::leave`].
    pub fn join(&mut self, id: SessionId) {
        self.joined.insert(id);
    }

    /// Records a session departure.
    pub fn leave(&mut self, id: SessionId) {
        self.joined.remove(&id);
    }

    /// Returns `true` if an event with the given scope should be
    /// delivered.
    #[must_use]
    pub fn matches(&self, scope: EventScope) -> bool {
        match scope {
            EventScope::Global => self.global,
            EventScope::Session(id) => {
                self.all_sessions || self.session_ids.contains(&id) || self.joined.contains(&id)
            }
        }
    }

    /// Number of explicitly subscribed sessions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.session_ids.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.all_sessions
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_nothing() {
        let filter = SubscriptionFilter::new();
        assert!(!filter.matches(EventScope::Global));
        assert!(!filter.matches(EventScope::Session(SessionId::new())));
    }

    #[test]
    fn subscribe_specific_session() {
        let mut filter = SubscriptionFilter::new();
        let id = SessionId::new();
        filter.subscribe(&[id], false);
        assert!(filter.matches(EventScope::Session(id)));
        assert!(!filter.matches(EventScope::Session(SessionId::new())));
        assert!(!filter.matches(EventScope::Global));
    }

    #[test]
    fn wildcard_matches_every_session_but_not_global() {
        let mut filter = SubscriptionFilter::new();
        filter.subscribe(&[], true);
        assert!(filter.matches(EventScope::Session(SessionId::new())));
        assert!(!filter.matches(EventScope::Global));
    }

    #[test]
    fn global_toggle() {
        let mut filter = SubscriptionFilter::new();
        filter.set_global(true);
        assert!(filter.matches(EventScope::Global));
        filter.set_global(false);
        assert!(!filter.matches(EventScope::Global));
    }

    #[test]
    fn joined_session_is_implicitly_subscribed() {
        let mut filter = SubscriptionFilter::new();
        let id = SessionId::new();
        filter.join(id);
        assert!(filter.matches(EventScope::Session(id)));
        filter.leave(id);
        assert!(!filter.matches(EventScope::Session(id)));
    }

    #[test]
    fn unsubscribe_keeps_joined_sessions() {
        let mut filter = SubscriptionFilter::new();
        let id = SessionId::new();
        filter.subscribe(&[id], false);
        filter.join(id);
        filter.unsubscribe(&[id], false);
        assert!(filter.matches(EventScope::Session(id)));
    }

    #[test]
    fn wildcard_can_be_cleared() {
        let mut filter = SubscriptionFilter::new();
        filter.subscribe(&[], true);
        filter.unsubscribe(&[], true);
        assert!(!filter.matches(EventScope::Session(SessionId::new())));
    }
}
