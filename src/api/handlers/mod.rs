//! REST endpoint handlers organized by resource.

pub mod sessions;
pub mod sources;
pub mod streams;
pub mod system;
pub mod views;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(streams::routes())
        .merge(sessions::routes())
        .merge(views::routes())
        .merge(sources::routes())
}
