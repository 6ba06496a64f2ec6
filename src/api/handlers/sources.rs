//! Data source handlers: CRUD plus on-demand sync.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateSourceRequest, SourceDto, SyncResponse, UpdateSourceRequest};
use crate::app_state::AppState;
use crate::domain::SourceId;
use crate::error::{ErrorResponse, GatewayError};
use crate::ingest::CreateSource;
use crate::persistence::models::SourcePatch;

/// `POST /sources` — Register a data source.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when the kind-specific
/// location field is missing.
#[utoipa::path(
    post,
    path = "/api/v1/sources",
    tag = "Sources",
    summary = "Register a data source",
    description = "Registers a TOML file, JSON API, or manual source. Enabled non-manual sources start polling immediately.",
    request_body = CreateSourceRequest,
    responses(
        (status = 201, description = "Source created", body = SourceDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_source(
    State(state): State<AppState>,
    Json(req): Json<CreateSourceRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .ingest
        .create_source(CreateSource {
            name: req.name,
            kind: req.kind,
            url: req.url,
            file_path: req.file_path,
            refresh_interval_secs: req.refresh_interval_secs,
            enabled: req.enabled,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SourceDto::from(record))))
}

/// `GET /sources` — List registered sources.
///
/// # Errors
///
/// Returns [`GatewayError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/sources",
    tag = "Sources",
    summary = "List data sources",
    responses(
        (status = 200, description = "Source list", body = Vec<SourceDto>),
    )
)]
pub async fn list_sources(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let records = state.store.list_sources().await?;
    let sources: Vec<SourceDto> = records.into_iter().map(SourceDto::from).collect();
    Ok(Json(sources))
}

/// `GET /sources/:id` — Get one source.
///
/// # Errors
///
/// Returns [`GatewayError::SourceNotFound`] if the source does not
/// exist.
#[utoipa::path(
    get,
    path = "/api/v1/sources/{id}",
    tag = "Sources",
    summary = "Get data source details",
    params(
        ("id" = uuid::Uuid, Path, description = "Source UUID"),
    ),
    responses(
        (status = 200, description = "Source details", body = SourceDto),
        (status = 404, description = "Source not found", body = ErrorResponse),
    )
)]
pub async fn get_source(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state.store.get_source(id).await?;
    Ok(Json(SourceDto::from(record)))
}

/// `PATCH /sources/:id` — Partially update a source.
///
/// The source's polling task restarts so interval and endpoint changes
/// take effect immediately.
///
/// # Errors
///
/// Returns [`GatewayError::SourceNotFound`] if the source does not
/// exist.
#[utoipa::path(
    patch,
    path = "/api/v1/sources/{id}",
    tag = "Sources",
    summary = "Update a data source",
    params(
        ("id" = uuid::Uuid, Path, description = "Source UUID"),
    ),
    request_body = UpdateSourceRequest,
    responses(
        (status = 200, description = "Updated source", body = SourceDto),
        (status = 404, description = "Source not found", body = ErrorResponse),
    )
)]
pub async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateSourceRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .ingest
        .update_source(
            SourceId::from_uuid(id),
            SourcePatch {
                name: req.name,
                url: req.url,
                file_path: req.file_path,
                refresh_interval_secs: req.refresh_interval_secs,
                enabled: req.enabled,
            },
        )
        .await?;

    Ok(Json(SourceDto::from(record)))
}

/// `DELETE /sources/:id` — Remove a source.
///
/// # Errors
///
/// Returns [`GatewayError::SourceNotFound`] if the source does not
/// exist.
#[utoipa::path(
    delete,
    path = "/api/v1/sources/{id}",
    tag = "Sources",
    summary = "Delete a data source",
    description = "Stops the source's polling task and removes it. Streams it imported stay in the catalog.",
    params(
        ("id" = uuid::Uuid, Path, description = "Source UUID"),
    ),
    responses(
        (status = 204, description = "Source deleted"),
        (status = 404, description = "Source not found", body = ErrorResponse),
    )
)]
pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state.ingest.delete_source(SourceId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /sources/:id/sync` — Sync a source right now.
///
/// # Errors
///
/// Returns [`GatewayError::SourceNotFound`] for an unknown source, or
/// [`GatewayError::SourceSync`] when fetching or parsing fails.
#[utoipa::path(
    post,
    path = "/api/v1/sources/{id}/sync",
    tag = "Sources",
    summary = "Sync a data source immediately",
    description = "Fetches and applies the source without waiting for its next poll. Works for disabled sources too.",
    params(
        ("id" = uuid::Uuid, Path, description = "Source UUID"),
    ),
    responses(
        (status = 200, description = "Sync result", body = SyncResponse),
        (status = 404, description = "Source not found", body = ErrorResponse),
        (status = 502, description = "Fetch or parse failed", body = ErrorResponse),
    )
)]
pub async fn sync_source(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let stream_count = state.ingest.sync_now(SourceId::from_uuid(id)).await?;

    Ok(Json(SyncResponse {
        source_id: id,
        stream_count,
    }))
}

/// Data source routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sources", post(create_source).get(list_sources))
        .route(
            "/sources/{id}",
            get(get_source).patch(update_source).delete(delete_source),
        )
        .route("/sources/{id}/sync", post(sync_source))
}
