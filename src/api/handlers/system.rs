//! System endpoints: health check and platform catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::StreamPlatform;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Detectable platform info.
#[derive(Debug, Serialize, ToSchema)]
struct PlatformInfo {
    platform: StreamPlatform,
    description: &'static str,
}

/// `GET /config/platforms` — List detectable stream platforms.
#[utoipa::path(
    get,
    path = "/config/platforms",
    tag = "System",
    summary = "List detectable stream platforms",
    description = "Returns every platform the gateway can detect from a stream URL.",
    responses(
        (status = 200, description = "Platform catalog", body = Vec<PlatformInfo>),
    )
)]
pub async fn platforms_handler() -> impl IntoResponse {
    let platforms: Vec<PlatformInfo> = StreamPlatform::all()
        .iter()
        .map(|&platform| PlatformInfo {
            platform,
            description: platform_description(platform),
        })
        .collect();
    (StatusCode::OK, Json(platforms))
}

const fn platform_description(platform: StreamPlatform) -> &'static str {
    match platform {
        StreamPlatform::Youtube => "YouTube (youtube.com, youtu.be)",
        StreamPlatform::Twitch => "Twitch (twitch.tv)",
        StreamPlatform::Facebook => "Facebook Live (facebook.com)",
        StreamPlatform::Instagram => "Instagram Live (instagram.com)",
        StreamPlatform::Hls => "Raw HLS playlist (.m3u8)",
        StreamPlatform::Rtmp => "RTMP ingest (rtmp://)",
        StreamPlatform::Generic => "Anything playable in an embedded browser",
    }
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/platforms", get(platforms_handler))
}
