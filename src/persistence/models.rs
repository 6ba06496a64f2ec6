//! Database row models and partial-update structs.
//!
//! `platform` and `kind` columns are stored as lowercase strings and
//! parsed back into their domain enums at the API boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `streams` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StreamRecord {
    /// Stream identifier.
    pub id: Uuid,
    /// Stream URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Platform string (e.g. `"youtube"`).
    pub platform: String,
    /// Optional thumbnail URL.
    pub thumbnail: Option<String>,
    /// Free-form metadata, including the raw source entry for synced
    /// streams.
    pub metadata: serde_json::Value,
    /// Whether the stream is currently live.
    pub is_live: bool,
    /// Owning data source, when the stream came from a sync.
    pub source_id: Option<Uuid>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a stream row.
#[derive(Debug, Clone)]
pub struct NewStream {
    /// Stream identifier (caller-generated UUID v4).
    pub id: Uuid,
    /// Stream URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Platform string.
    pub platform: String,
    /// Optional thumbnail URL.
    pub thumbnail: Option<String>,
    /// Free-form metadata.
    pub metadata: serde_json::Value,
    /// Live flag.
    pub is_live: bool,
    /// Owning data source, if any.
    pub source_id: Option<Uuid>,
}

/// Partial update for a stream row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct StreamPatch {
    /// New title.
    pub title: Option<String>,
    /// New platform string.
    pub platform: Option<String>,
    /// New thumbnail URL.
    pub thumbnail: Option<String>,
    /// New metadata blob.
    pub metadata: Option<serde_json::Value>,
}

/// A row from the `sessions` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionRecord {
    /// Session identifier.
    pub id: Uuid,
    /// Session name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Grid column count.
    pub grid_cols: i32,
    /// Grid row count.
    pub grid_rows: i32,
    /// Whether the session is publicly listed.
    pub is_public: bool,
    /// Opaque creator identifier.
    pub created_by: String,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a session row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New grid column count.
    pub grid_cols: Option<i32>,
    /// New grid row count.
    pub grid_rows: Option<i32>,
    /// New visibility.
    pub is_public: Option<bool>,
}

/// A row from the `views` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ViewRecord {
    /// View identifier.
    pub id: Uuid,
    /// Owning session.
    pub session_id: Uuid,
    /// Bound stream, if any.
    pub stream_id: Option<Uuid>,
    /// Column of the top-left cell.
    pub position_x: i32,
    /// Row of the top-left cell.
    pub position_y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
    /// Whether audio plays for this view.
    pub audio_enabled: bool,
    /// Whether the video is blurred.
    pub blurred: bool,
    /// Whether the view is rendered.
    pub visible: bool,
}

/// Insert payload for a view row.
#[derive(Debug, Clone)]
pub struct NewView {
    /// View identifier (caller-generated UUID v4).
    pub id: Uuid,
    /// Owning session.
    pub session_id: Uuid,
    /// Bound stream, if any.
    pub stream_id: Option<Uuid>,
    /// Column of the top-left cell.
    pub position_x: i32,
    /// Row of the top-left cell.
    pub position_y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
    /// Whether audio plays for this view.
    pub audio_enabled: bool,
    /// Whether the video is blurred.
    pub blurred: bool,
    /// Whether the view is rendered.
    pub visible: bool,
}

/// Partial update for a view row.
///
/// `None` fields are left unchanged; `clear_stream` unbinds the stream
/// regardless of `stream_id`.
#[derive(Debug, Clone, Default)]
pub struct ViewPatch {
    /// New bound stream.
    pub stream_id: Option<Uuid>,
    /// Unbind the stream from this view.
    pub clear_stream: bool,
    /// New column.
    pub position_x: Option<i32>,
    /// New row.
    pub position_y: Option<i32>,
    /// New width.
    pub width: Option<i32>,
    /// New height.
    pub height: Option<i32>,
    /// New audio flag.
    pub audio_enabled: Option<bool>,
    /// New blur flag.
    pub blurred: Option<bool>,
    /// New visibility flag.
    pub visible: Option<bool>,
}

/// A row from the `data_sources` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SourceRecord {
    /// Source identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Source kind string (`"toml_file"`, `"json_api"`, `"manual"`).
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
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a data source row.
#[derive(Debug, Clone)]
pub struct NewSource {
    /// Source identifier (caller-generated UUID v4).
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Source kind string.
    pub kind: String,
    /// Endpoint URL for `json_api` sources.
    pub url: Option<String>,
    /// Local path for `toml_file` sources.
    pub file_path: Option<String>,
    /// Seconds between polls.
    pub refresh_interval_secs: i32,
    /// Whether the background task runs for this source.
    pub enabled: bool,
}

/// Partial update for a data source row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct SourcePatch {
    /// New name.
    pub name: Option<String>,
    /// New endpoint URL.
    pub url: Option<String>,
    /// New file path.
    pub file_path: Option<String>,
    /// New refresh interval.
    pub refresh_interval_secs: Option<i32>,
    /// New enabled flag.
    pub enabled: Option<bool>,
}
