//! Session handlers: CRUD plus the collaboration endpoints (join,
//! leave, presence, grid layout).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateSessionRequest, CreateViewRequest, GridLayoutRequest, PresenceMemberRequest,
    PresenceResponse, SessionDetailDto, SessionDto, SessionListParams, SessionListResponse,
    UpdatePresenceRequest, UpdateSessionRequest, ViewDto,
};
use crate::app_state::AppState;
use crate::domain::{SessionId, UserId};
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::SessionPatch;
use crate::service::session_service::{CreateSession, CreateView};

/// `POST /sessions` — Create a session.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an empty name or bad
/// grid dimensions.
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tag = "Sessions",
    summary = "Create a session",
    description = "Creates a session with a grid of viewing cells. Grid dimensions default to 3×3.",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .session_service
        .create_session(CreateSession {
            name: req.name,
            description: req.description,
            grid_cols: req.grid_cols,
            grid_rows: req.grid_rows,
            is_public: req.is_public,
            created_by: req.created_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SessionDto::from(record))))
}

/// `GET /sessions` — List sessions.
///
/// # Errors
///
/// Returns [`GatewayError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/sessions",
    tag = "Sessions",
    summary = "List sessions",
    description = "Returns sessions most-recently-updated first, optionally filtered by public visibility.",
    params(SessionListParams),
    responses(
        (status = 200, description = "Session list", body = SessionListResponse),
    )
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<SessionListParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let records = state
        .store
        .list_sessions(limit, offset, params.is_public)
        .await?;

    Ok(Json(SessionListResponse {
        data: records.into_iter().map(SessionDto::from).collect(),
        limit,
        offset,
    }))
}

/// `GET /sessions/:id` — Get a session with its views and presence.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{id}",
    tag = "Sessions",
    summary = "Get session details",
    description = "Returns the session, its views in reading order, and the users currently in it.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    responses(
        (status = 200, description = "Session details", body = SessionDetailDto),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let session = state.store.get_session(id).await?;
    let views = state.store.list_views_for_session(id).await?;

    let session_id = SessionId::from_uuid(id);
    let active_users = state.session_service.presence().active_users(session_id).await;

    Ok(Json(SessionDetailDto {
        session: SessionDto::from(session),
        views: views.into_iter().map(ViewDto::from).collect(),
        active_user_count: active_users.len(),
        active_users: active_users.into_iter().map(|u| *u.as_uuid()).collect(),
    }))
}

/// `PATCH /sessions/:id` — Partially update a session.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist, or [`GatewayError::InvalidRequest`] for bad grid dimensions.
#[utoipa::path(
    patch,
    path = "/api/v1/sessions/{id}",
    tag = "Sessions",
    summary = "Update a session",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = UpdateSessionRequest,
    responses(
        (status = 200, description = "Updated session", body = SessionDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .session_service
        .update_session(
            SessionId::from_uuid(id),
            SessionPatch {
                name: req.name,
                description: req.description,
                grid_cols: req.grid_cols,
                grid_rows: req.grid_rows,
                is_public: req.is_public,
            },
        )
        .await?;

    Ok(Json(SessionDto::from(record)))
}

/// `DELETE /sessions/:id` — Delete a session and its views.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{id}",
    tag = "Sessions",
    summary = "Delete a session",
    description = "Deletes the session, its views, and its presence entry.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .session_service
        .delete_session(SessionId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /sessions/:id/views` — Place a view into the session grid.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{id}/views",
    tag = "Views",
    summary = "Add a view to a session",
    description = "Places a viewing cell into the session grid. Defaults: 1×1 cell, audio on, not blurred, visible.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = CreateViewRequest,
    responses(
        (status = 201, description = "View created", body = ViewDto),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn create_view(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CreateViewRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .session_service
        .create_view(CreateView {
            session_id: SessionId::from_uuid(id),
            stream_id: req.stream_id,
            position_x: req.position_x,
            position_y: req.position_y,
            width: req.width,
            height: req.height,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ViewDto::from(record))))
}

/// `POST /sessions/:id/join` — Enter a session.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{id}/join",
    tag = "Presence",
    summary = "Join a session",
    description = "Adds the user to the session's active set and announces the join to subscribers.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = PresenceMemberRequest,
    responses(
        (status = 200, description = "Active users after the join", body = PresenceResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn join_session(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<PresenceMemberRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let session_id = SessionId::from_uuid(id);
    let active = state
        .session_service
        .join_session(session_id, UserId::from_uuid(req.user_id))
        .await?;

    Ok(Json(presence_response(id, active)))
}

/// `POST /sessions/:id/leave` — Leave a session.
///
/// Leaving a session the user never joined is a no-op.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{id}/leave",
    tag = "Presence",
    summary = "Leave a session",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = PresenceMemberRequest,
    responses(
        (status = 200, description = "Active users after the departure", body = PresenceResponse),
    )
)]
pub async fn leave_session(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<PresenceMemberRequest>,
) -> impl IntoResponse {
    let session_id = SessionId::from_uuid(id);
    let active = state
        .session_service
        .leave_session(session_id, UserId::from_uuid(req.user_id))
        .await;

    Json(presence_response(id, active))
}

/// `GET /sessions/:id/presence` — Who is in the session right now.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{id}/presence",
    tag = "Presence",
    summary = "Get session presence",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    responses(
        (status = 200, description = "Active users", body = PresenceResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn get_presence(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.get_session(id).await?;

    let active = state
        .session_service
        .presence()
        .active_users(SessionId::from_uuid(id))
        .await;

    Ok(Json(presence_response(id, active)))
}

/// `POST /sessions/:id/presence` — Broadcast a status change.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{id}/presence",
    tag = "Presence",
    summary = "Update presence status",
    description = "Broadcasts a status change (e.g. away) to the session's subscribers without touching the active set.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = UpdatePresenceRequest,
    responses(
        (status = 202, description = "Status change broadcast"),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn update_presence(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdatePresenceRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.get_session(id).await?;

    state.session_service.update_presence(
        SessionId::from_uuid(id),
        UserId::from_uuid(req.user_id),
        req.status,
    );

    Ok(StatusCode::ACCEPTED)
}

/// `POST /sessions/:id/layout` — Broadcast a transient layout update.
///
/// # Errors
///
/// Returns [`GatewayError::SessionNotFound`] if the session does not
/// exist.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{id}/layout",
    tag = "Sessions",
    summary = "Broadcast a grid layout update",
    description = "Forwards the layout payload verbatim to the session's subscribers. Layouts are never persisted; concurrent edits are last-writer-wins at each subscriber.",
    params(
        ("id" = uuid::Uuid, Path, description = "Session UUID"),
    ),
    request_body = GridLayoutRequest,
    responses(
        (status = 202, description = "Layout broadcast"),
        (status = 404, description = "Session not found", body = ErrorResponse),
    )
)]
pub async fn update_grid_layout(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<GridLayoutRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.get_session(id).await?;

    state
        .session_service
        .update_grid_layout(SessionId::from_uuid(id), req.layout);

    Ok(StatusCode::ACCEPTED)
}

fn presence_response(session_id: uuid::Uuid, active: Vec<UserId>) -> PresenceResponse {
    PresenceResponse {
        session_id,
        active_user_count: active.len(),
        active_users: active.into_iter().map(|u| *u.as_uuid()).collect(),
    }
}

/// Session and collaboration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session).get(list_sessions))
        .route(
            "/sessions/{id}",
            get(get_session).patch(update_session).delete(delete_session),
        )
        .route("/sessions/{id}/views", post(create_view))
        .route("/sessions/{id}/join", post(join_session))
        .route("/sessions/{id}/leave", post(leave_session))
        .route(
            "/sessions/{id}/presence",
            get(get_presence).post(update_presence),
        )
        .route("/sessions/{id}/layout", post(update_grid_layout))
}
