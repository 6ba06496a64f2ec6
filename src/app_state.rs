//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::ingest::IngestManager;
use crate::persistence::Store;
use crate::service::{SessionService, StreamService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Direct store access for read-only queries.
    pub store: Store,
    /// Stream catalog business logic.
    pub stream_service: StreamService,
    /// Session, view, and collaboration business logic.
    pub session_service: SessionService,
    /// Data-source CRUD and background polling.
    pub ingest: Arc<IngestManager>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}
