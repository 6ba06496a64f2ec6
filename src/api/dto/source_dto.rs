//! DTOs for data source endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::SourceKind;
use crate::persistence::models::SourceRecord;

/// A data source as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SourceDto {
    /// Source identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// How the source is fetched.
    pub kind: String,
    /// Endpoint URL for `json_api` sources.
    pub url: Option<String>,
    /// Local path for `toml_file` sources.
    pub file_path: Option<String>,
    /// Seconds between polls.
    pub refresh_interval_secs: i32,
    /// Whether the background task runs for this source.
    pub enabled: bool,
    /// Timestamp of the last successful sync.
    pub last_sync: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<SourceRecord> for SourceDto {
    fn from(record: SourceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            kind: record.kind,
            url: record.url,
            file_path: record.file_path,
            refresh_interval_secs: record.refresh_interval_secs,
            enabled: record.enabled,
            last_sync: record.last_sync,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Request body for `POST /sources`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSourceRequest {
    /// Human-readable name (required, non-empty).
    pub name: String,
    /// How the source is fetched.
    pub kind: SourceKind,
    /// Endpoint URL, required for `json_api`.
    #[serde(default)]
    pub url: Option<String>,
    /// Local file path, required for `toml_file`.
    #[serde(default)]
    pub file_path: Option<String>,
    /// Seconds between polls; defaults to 60.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: i32,
    /// Whether to start polling immediately; defaults to `true`.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Request body for `PATCH /sources/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSourceRequest {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New endpoint URL.
    #[serde(default)]
    pub url: Option<String>,
    /// New file path.
    #[serde(default)]
    pub file_path: Option<String>,
    /// New refresh interval.
    #[serde(default)]
    pub refresh_interval_secs: Option<i32>,
    /// New enabled flag.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Response body for `POST /sources/{id}/sync`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SyncResponse {
    /// The synced source.
    pub source_id: Uuid,
    /// Number of streams imported by this sync.
    pub stream_count: usize,
}

fn default_refresh_interval() -> i32 {
    60
}

fn default_enabled() -> bool {
    true
}
