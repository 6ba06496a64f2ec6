//! View handlers: get, update, delete. Creation lives under the
//! session routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{UpdateViewRequest, ViewDto};
use crate::app_state::AppState;
use crate::domain::ViewId;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::ViewPatch;

/// `GET /views/:id` — Get one view.
///
/// # Errors
///
/// Returns [`GatewayError::ViewNotFound`] if the view does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/views/{id}",
    tag = "Views",
    summary = "Get view details",
    params(
        ("id" = uuid::Uuid, Path, description = "View UUID"),
    ),
    responses(
        (status = 200, description = "View details", body = ViewDto),
        (status = 404, description = "View not found", body = ErrorResponse),
    )
)]
pub async fn get_view(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state.store.get_view(id).await?;
    Ok(Json(ViewDto::from(record)))
}

/// `PATCH /views/:id` — Partially update a view.
///
/// # Errors
///
/// Returns [`GatewayError::ViewNotFound`] if the view does not exist.
#[utoipa::path(
    patch,
    path = "/api/v1/views/{id}",
    tag = "Views",
    summary = "Update a view",
    description = "Applies a partial update. Set `clear_stream: true` to unbind the stream regardless of `stream_id`.",
    params(
        ("id" = uuid::Uuid, Path, description = "View UUID"),
    ),
    request_body = UpdateViewRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewDto),
        (status = 404, description = "View not found", body = ErrorResponse),
    )
)]
pub async fn update_view(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateViewRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .session_service
        .update_view(
            ViewId::from_uuid(id),
            ViewPatch {
                stream_id: req.stream_id,
                clear_stream: req.clear_stream,
                position_x: req.position_x,
                position_y: req.position_y,
                width: req.width,
                height: req.height,
                audio_enabled: req.audio_enabled,
                blurred: req.blurred,
                visible: req.visible,
            },
        )
        .await?;

    Ok(Json(ViewDto::from(record)))
}

/// `DELETE /views/:id` — Remove a view from its grid.
///
/// # Errors
///
/// Returns [`GatewayError::ViewNotFound`] if the view does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/views/{id}",
    tag = "Views",
    summary = "Delete a view",
    params(
        ("id" = uuid::Uuid, Path, description = "View UUID"),
    ),
    responses(
        (status = 204, description = "View deleted"),
        (status = 404, description = "View not found", body = ErrorResponse),
    )
)]
pub async fn delete_view(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .session_service
        .delete_view(ViewId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// View routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/views/{id}",
        get(get_view).patch(update_view).delete(delete_view),
    )
}
