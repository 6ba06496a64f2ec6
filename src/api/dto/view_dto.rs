//! DTOs for view (grid cell) endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::persistence::models::ViewRecord;

/// A grid cell as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewDto {
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

impl From<ViewRecord> for ViewDto {
    fn from(record: ViewRecord) -> Self {
        Self {
            id: record.id,
            session_id: record.session_id,
            stream_id: record.stream_id,
            position_x: record.position_x,
            position_y: record.position_y,
            width: record.width,
            height: record.height,
            audio_enabled: record.audio_enabled,
            blurred: record.blurred,
            visible: record.visible,
        }
    }
}

/// Request body for `POST /sessions/{id}/views`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateViewRequest {
    /// Stream to bind, if any.
    #[serde(default)]
    pub stream_id: Option<Uuid>,
    /// Column of the top-left cell.
    pub position_x: i32,
    /// Row of the top-left cell.
    pub position_y: i32,
    /// Width in cells; defaults to 1.
    #[serde(default)]
    pub width: Option<i32>,
    /// Height in cells; defaults to 1.
    #[serde(default)]
    pub height: Option<i32>,
}

/// Request body for `PATCH /views/{id}`.
///
/// `clear_stream: true` unbinds the stream regardless of `stream_id`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateViewRequest {
    /// New bound stream.
    #[serde(default)]
    pub stream_id: Option<Uuid>,
    /// Unbind the stream from this view.
    #[serde(default)]
    pub clear_stream: bool,
    /// New column.
    #[serde(default)]
    pub position_x: Option<i32>,
    /// New row.
    #[serde(default)]
    pub position_y: Option<i32>,
    /// New width.
    #[serde(default)]
    pub width: Option<i32>,
    /// New height.
    #[serde(default)]
    pub height: Option<i32>,
    /// New audio flag.
    #[serde(default)]
    pub audio_enabled: Option<bool>,
    /// New blur flag.
    #[serde(default)]
    pub blurred: Option<bool>,
    /// New visibility flag.
    #[serde(default)]
    pub visible: Option<bool>,
}
