//! Stream catalog handlers: create, list, get, update, live flag,
//! delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::dto::{
    CreateStreamRequest, SetLiveRequest, StreamByUrlParams, StreamDto, StreamListParams,
    StreamListResponse, UpdateStreamRequest,
};
use crate::app_state::AppState;
use crate::domain::StreamId;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::StreamPatch;
use crate::service::stream_service::CreateStream;

/// `POST /streams` — Add a stream to the catalog.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an empty URL.
#[utoipa::path(
    post,
    path = "/api/v1/streams",
    tag = "Streams",
    summary = "Add a stream to the catalog",
    description = "Adds a stream by URL. The platform is detected from the URL unless supplied, and a missing title defaults to \"Untitled Stream\". Re-adding a known URL returns the existing stream with status 200.",
    request_body = CreateStreamRequest,
    responses(
        (status = 201, description = "Stream created", body = StreamDto),
        (status = 200, description = "URL already catalogued; existing stream returned", body = StreamDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_stream(
    State(state): State<AppState>,
    Json(req): Json<CreateStreamRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let outcome = state
        .stream_service
        .create_stream(CreateStream {
            url: req.url,
            title: req.title,
            platform: req.platform,
            thumbnail: req.thumbnail,
            metadata: req.metadata,
            is_live: req.is_live,
        })
        .await?;

    let status = if outcome.is_new() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(StreamDto::from(outcome.into_record()))))
}

/// `GET /streams` — List catalog streams.
///
/// # Errors
///
/// Returns [`GatewayError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/streams",
    tag = "Streams",
    summary = "List streams",
    description = "Returns catalog streams newest-first, optionally filtered by a case-insensitive substring match on title or URL.",
    params(StreamListParams),
    responses(
        (status = 200, description = "Stream list", body = StreamListResponse),
    )
)]
pub async fn list_streams(
    State(state): State<AppState>,
    Query(params): Query<StreamListParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let records = state
        .store
        .list_streams(limit, offset, params.search.as_deref())
        .await?;

    Ok(Json(StreamListResponse {
        data: records.into_iter().map(StreamDto::from).collect(),
        limit,
        offset,
    }))
}

/// `GET /streams/:id` — Get one stream.
///
/// # Errors
///
/// Returns [`GatewayError::StreamNotFound`] if the stream does not
/// exist.
#[utoipa::path(
    get,
    path = "/api/v1/streams/{id}",
    tag = "Streams",
    summary = "Get stream details",
    params(
        ("id" = uuid::Uuid, Path, description = "Stream UUID"),
    ),
    responses(
        (status = 200, description = "Stream details", body = StreamDto),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
pub async fn get_stream(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state.store.get_stream(id).await?;
    Ok(Json(StreamDto::from(record)))
}

/// `GET /streams/by-url` — Look a stream up by its exact URL.
///
/// # Errors
///
/// Returns [`GatewayError::StreamNotFound`] if no stream has that URL.
#[utoipa::path(
    get,
    path = "/api/v1/streams/by-url",
    tag = "Streams",
    summary = "Look up a stream by URL",
    params(StreamByUrlParams),
    responses(
        (status = 200, description = "Stream details", body = StreamDto),
        (status = 404, description = "No stream with that URL", body = ErrorResponse),
    )
)]
pub async fn get_stream_by_url(
    State(state): State<AppState>,
    Query(params): Query<StreamByUrlParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .store
        .get_stream_by_url(&params.url)
        .await?
        .ok_or_else(|| GatewayError::StreamNotFound(params.url))?;
    Ok(Json(StreamDto::from(record)))
}

/// `PATCH /streams/:id` — Partially update a stream.
///
/// # Errors
///
/// Returns [`GatewayError::StreamNotFound`] if the stream does not
/// exist.
#[utoipa::path(
    patch,
    path = "/api/v1/streams/{id}",
    tag = "Streams",
    summary = "Update a stream",
    description = "Applies a partial update; omitted fields are left unchanged.",
    params(
        ("id" = uuid::Uuid, Path, description = "Stream UUID"),
    ),
    request_body = UpdateStreamRequest,
    responses(
        (status = 200, description = "Updated stream", body = StreamDto),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
pub async fn update_stream(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateStreamRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .stream_service
        .update_stream(
            StreamId::from_uuid(id),
            StreamPatch {
                title: req.title,
                platform: req.platform.map(|p| p.as_str().to_string()),
                thumbnail: req.thumbnail,
                metadata: req.metadata,
            },
        )
        .await?;

    Ok(Json(StreamDto::from(record)))
}

/// `PUT /streams/:id/live` — Set the live flag.
///
/// # Errors
///
/// Returns [`GatewayError::StreamNotFound`] if the stream does not
/// exist.
#[utoipa::path(
    put,
    path = "/api/v1/streams/{id}/live",
    tag = "Streams",
    summary = "Set a stream's live flag",
    params(
        ("id" = uuid::Uuid, Path, description = "Stream UUID"),
    ),
    request_body = SetLiveRequest,
    responses(
        (status = 200, description = "Updated stream", body = StreamDto),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
pub async fn set_stream_live(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<SetLiveRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .stream_service
        .set_live(StreamId::from_uuid(id), req.is_live)
        .await?;

    Ok(Json(StreamDto::from(record)))
}

/// `DELETE /streams/:id` — Remove a stream.
///
/// # Errors
///
/// Returns [`GatewayError::StreamNotFound`] if the stream does not
/// exist.
#[utoipa::path(
    delete,
    path = "/api/v1/streams/{id}",
    tag = "Streams",
    summary = "Delete a stream",
    description = "Removes the stream; views bound to it keep their cell with the stream unbound.",
    params(
        ("id" = uuid::Uuid, Path, description = "Stream UUID"),
    ),
    responses(
        (status = 204, description = "Stream deleted"),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
pub async fn delete_stream(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .stream_service
        .delete_stream(StreamId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stream catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/streams",
            axum::routing::post(create_stream).get(list_streams),
        )
        .route("/streams/by-url", get(get_stream_by_url))
        .route(
            "/streams/{id}",
            get(get_stream).patch(update_stream).delete(delete_stream),
        )
        .route("/streams/{id}/live", put(set_stream_live))
}
