//! DTOs for session and collaboration endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::dto::view_dto::ViewDto;
use crate::domain::PresenceStatus;
use crate::persistence::models::SessionRecord;

/// A session as returned by list endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionDto {
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
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<SessionRecord> for SessionDto {
    fn from(record: SessionRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            grid_cols: record.grid_cols,
            grid_rows: record.grid_rows,
            is_public: record.is_public,
            created_by: record.created_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// A session with its views and live presence, returned by
/// `GET /sessions/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionDetailDto {
    /// The session itself.
    #[serde(flatten)]
    pub session: SessionDto,
    /// Views in reading order.
    pub views: Vec<ViewDto>,
    /// Users currently in the session.
    pub active_users: Vec<Uuid>,
    /// Number of users currently in the session.
    pub active_user_count: usize,
}

/// Request body for `POST /sessions`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Session name (required, non-empty).
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Grid column count; defaults to 3.
    #[serde(default)]
    pub grid_cols: Option<i32>,
    /// Grid row count; defaults to 3.
    #[serde(default)]
    pub grid_rows: Option<i32>,
    /// Whether the session is publicly listed; defaults to `false`.
    #[serde(default)]
    pub is_public: Option<bool>,
    /// Opaque creator identifier; defaults to `"anonymous"`.
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

/// Request body for `PATCH /sessions/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSessionRequest {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New grid column count.
    #[serde(default)]
    pub grid_cols: Option<i32>,
    /// New grid row count.
    #[serde(default)]
    pub grid_rows: Option<i32>,
    /// New visibility.
    #[serde(default)]
    pub is_public: Option<bool>,
}

/// Query parameters for `GET /sessions`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SessionListParams {
    /// Maximum number of items to return (max 200). Defaults to 50.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of items to skip. Defaults to 0.
    #[serde(default)]
    pub offset: Option<i64>,
    /// Filter by public visibility.
    #[serde(default)]
    pub is_public: Option<bool>,
}

/// Response body for `GET /sessions`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionListResponse {
    /// Matching sessions, most recently updated first.
    pub data: Vec<SessionDto>,
    /// Applied limit.
    pub limit: i64,
    /// Applied offset.
    pub offset: i64,
}

/// Request body for `POST /sessions/{id}/join` and `/leave`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PresenceMemberRequest {
    /// The joining or leaving user.
    pub user_id: Uuid,
}

/// Request body for `POST /sessions/{id}/presence`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePresenceRequest {
    /// The user whose status changed.
    pub user_id: Uuid,
    /// The new status.
    pub status: PresenceStatus,
}

/// Response body for join/leave/presence queries.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PresenceResponse {
    /// The session in question.
    pub session_id: Uuid,
    /// Users currently in the session.
    pub active_users: Vec<Uuid>,
    /// Number of users currently in the session.
    pub active_user_count: usize,
}

/// Request body for `POST /sessions/{id}/layout`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GridLayoutRequest {
    /// Opaque layout payload, forwarded to subscribers verbatim.
    pub layout: serde_json::Value,
}

fn default_created_by() -> String {
    "anonymous".to_string()
}
