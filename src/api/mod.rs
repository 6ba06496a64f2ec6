//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; `/health` and
//! `/config/platforms` live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Streamwall Gateway API",
        description = "Multi-stream wall backend: stream catalog, grid sessions, data sources, and real-time collaboration."
    ),
    paths(
        handlers::streams::create_stream,
        handlers::streams::list_streams,
        handlers::streams::get_stream,
        handlers::streams::get_stream_by_url,
        handlers::streams::update_stream,
        handlers::streams::set_stream_live,
        handlers::streams::delete_stream,
        handlers::sessions::create_session,
        handlers::sessions::list_sessions,
        handlers::sessions::get_session,
        handlers::sessions::update_session,
        handlers::sessions::delete_session,
        handlers::sessions::create_view,
        handlers::sessions::join_session,
        handlers::sessions::leave_session,
        handlers::sessions::get_presence,
        handlers::sessions::update_presence,
        handlers::sessions::update_grid_layout,
        handlers::views::get_view,
        handlers::views::update_view,
        handlers::views::delete_view,
        handlers::sources::create_source,
        handlers::sources::list_sources,
        handlers::sources::get_source,
        handlers::sources::update_source,
        handlers::sources::delete_source,
        handlers::sources::sync_source,
        handlers::system::health_handler,
        handlers::system::platforms_handler,
    ),
    tags(
        (name = "Streams", description = "Stream catalog"),
        (name = "Sessions", description = "Grid sessions"),
        (name = "Views", description = "Grid cells"),
        (name = "Presence", description = "Who is watching together"),
        (name = "Sources", description = "Stream data sources"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}
