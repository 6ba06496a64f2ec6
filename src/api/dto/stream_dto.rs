//! DTOs for the stream catalog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::StreamPlatform;
use crate::persistence::models::StreamRecord;

/// A catalog stream as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StreamDto {
    /// Stream identifier.
    pub id: Uuid,
    /// Stream URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Detected or assigned platform.
    pub platform: StreamPlatform,
    /// Optional thumbnail URL.
    pub thumbnail: Option<String>,
    /// Free-form metadata.
    pub metadata: serde_json::Value,
    /// Whether the stream is currently live.
    pub is_live: bool,
    /// Owning data source, when the stream came from a sync.
    pub source_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<StreamRecord> for StreamDto {
    fn from(record: StreamRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            title: record.title,
            platform: StreamPlatform::from_str_or_generic(&record.platform),
            thumbnail: record.thumbnail,
            metadata: record.metadata,
            is_live: record.is_live,
            source_id: record.source_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Request body for `POST /streams`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStreamRequest {
    /// Stream URL (required, non-empty).
    pub url: String,
    /// Display title; defaults to `"Untitled Stream"`.
    #[serde(default)]
    pub title: String,
    /// Platform override; detected from the URL when omitted.
    #[serde(default)]
    pub platform: Option<StreamPlatform>,
    /// Optional thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Free-form metadata; defaults to `{}`.
    #[serde(default = "empty_object")]
    pub metadata: serde_json::Value,
    /// Initial live flag; defaults to `false`.
    #[serde(default)]
    pub is_live: bool,
}

/// Request body for `PATCH /streams/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStreamRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New platform.
    #[serde(default)]
    pub platform: Option<StreamPlatform>,
    /// New thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// New metadata blob.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Request body for `PUT /streams/{id}/live`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetLiveRequest {
    /// New live flag.
    pub is_live: bool,
}

/// Query parameters for `GET /streams`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct StreamListParams {
    /// Maximum number of items to return (max 200). Defaults to 50.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of items to skip. Defaults to 0.
    #[serde(default)]
    pub offset: Option<i64>,
    /// Case-insensitive substring match on title or URL.
    #[serde(default)]
    pub search: Option<String>,
}

/// Query parameters for `GET /streams/by-url`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct StreamByUrlParams {
    /// Exact stream URL to look up.
    pub url: String,
}

/// Response body for `GET /streams`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StreamListResponse {
    /// Matching streams, newest first.
    pub data: Vec<StreamDto>,
    /// Applied limit.
    pub limit: i64,
    /// Applied offset.
    pub offset: i64,
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}
