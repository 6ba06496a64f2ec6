//! PostgreSQL implementation of the persistence layer.
//!
//! Partial updates use `COALESCE` so a single statement covers every
//! combination of patched fields.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{
    NewSource, NewStream, NewView, SessionPatch, SessionRecord, SourcePatch, SourceRecord,
    StreamPatch, StreamRecord, ViewPatch, ViewRecord,
};
use crate::error::GatewayError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs pending migrations from the bundled `migrations/` directory.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] when a migration fails.
    pub async fn migrate(&self) -> Result<(), GatewayError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))
    }

    // ── Streams ─────────────────────────────────────────────────────────

    /// Inserts a stream row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn insert_stream(&self, new: &NewStream) -> Result<StreamRecord, GatewayError> {
        let record = sqlx::query_as::<_, StreamRecord>(
            "INSERT INTO streams (id, url, title, platform, thumbnail, metadata, is_live, source_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(new.id)
        .bind(&new.url)
        .bind(&new.title)
        .bind(&new.platform)
        .bind(&new.thumbnail)
        .bind(&new.metadata)
        .bind(new.is_live)
        .bind(new.source_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    /// Applies a partial update to a stream row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StreamNotFound`] if no row matches.
    pub async fn update_stream(
        &self,
        id: Uuid,
        patch: &StreamPatch,
    ) -> Result<StreamRecord, GatewayError> {
        sqlx::query_as::<_, StreamRecord>(
            "UPDATE streams SET \
               title = COALESCE($2, title), \
               platform = COALESCE($3, platform), \
               thumbnail = COALESCE($4, thumbnail), \
               metadata = COALESCE($5, metadata), \
               updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.platform)
        .bind(&patch.thumbnail)
        .bind(&patch.metadata)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| GatewayError::StreamNotFound(id.to_string()))
    }

    /// Sets a stream's live flag.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StreamNotFound`] if no row matches.
    pub async fn set_stream_live(
        &self,
        id: Uuid,
        is_live: bool,
    ) -> Result<StreamRecord, GatewayError> {
        sqlx::query_as::<_, StreamRecord>(
            "UPDATE streams SET is_live = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_live)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| GatewayError::StreamNotFound(id.to_string()))
    }

    /// Deletes a stream row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StreamNotFound`] if no row matches.
    pub async fn delete_stream(&self, id: Uuid) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM streams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::StreamNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Fetches a stream by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StreamNotFound`] if no row matches.
    pub async fn get_stream(&self, id: Uuid) -> Result<StreamRecord, GatewayError> {
        sqlx::query_as::<_, StreamRecord>("SELECT * FROM streams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| GatewayError::StreamNotFound(id.to_string()))
    }

    /// Fetches a stream by exact URL, if present.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn get_stream_by_url(
        &self,
        url: &str,
    ) -> Result<Option<StreamRecord>, GatewayError> {
        let record = sqlx::query_as::<_, StreamRecord>(
            "SELECT * FROM streams WHERE url = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Lists streams, newest first, optionally filtered by a
    /// case-insensitive substring match on title or URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_streams(
        &self,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<Vec<StreamRecord>, GatewayError> {
        let records = if let Some(needle) = search {
            let pattern = format!("%{needle}%");
            sqlx::query_as::<_, StreamRecord>(
                "SELECT * FROM streams \
                 WHERE title ILIKE $3 OR url ILIKE $3 \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, StreamRecord>(
                "SELECT * FROM streams ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(records)
    }

    /// Replaces every stream contributed by a data source with a fresh
    /// batch, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure; the
    /// transaction rolls back and the previous batch stays in place.
    pub async fn replace_streams_for_source(
        &self,
        source_id: Uuid,
        streams: &[NewStream],
    ) -> Result<(), GatewayError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM streams WHERE source_id = $1")
            .bind(source_id)
            .execute(&mut *tx)
            .await?;

        for new in streams {
            sqlx::query(
                "INSERT INTO streams (id, url, title, platform, thumbnail, metadata, is_live, source_id) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(new.id)
            .bind(&new.url)
            .bind(&new.title)
            .bind(&new.platform)
            .bind(&new.thumbnail)
            .bind(&new.metadata)
            .bind(new.is_live)
            .bind(new.source_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    // ── Sessions ────────────────────────────────────────────────────────

    /// Inserts a session row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_session(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        grid_cols: i32,
        grid_rows: i32,
        is_public: bool,
        created_by: &str,
    ) -> Result<SessionRecord, GatewayError> {
        let record = sqlx::query_as::<_, SessionRecord>(
            "INSERT INTO sessions (id, name, description, grid_cols, grid_rows, is_public, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(grid_cols)
        .bind(grid_rows)
        .bind(is_public)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    /// Applies a partial update to a session row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionNotFound`] if no row matches.
    pub async fn update_session(
        &self,
        id: Uuid,
        patch: &SessionPatch,
    ) -> Result<SessionRecord, GatewayError> {
        sqlx::query_as::<_, SessionRecord>(
            "UPDATE sessions SET \
               name = COALESCE($2, name), \
               description = COALESCE($3, description), \
               grid_cols = COALESCE($4, grid_cols), \
               grid_rows = COALESCE($5, grid_rows), \
               is_public = COALESCE($6, is_public), \
               updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.grid_cols)
        .bind(patch.grid_rows)
        .bind(patch.is_public)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::SessionNotFound(id))
    }

    /// Deletes a session row; views cascade.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionNotFound`] if no row matches.
    pub async fn delete_session(&self, id: Uuid) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::SessionNotFound(id));
        }
        Ok(())
    }

    /// Fetches a session by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionNotFound`] if no row matches.
    pub async fn get_session(&self, id: Uuid) -> Result<SessionRecord, GatewayError> {
        sqlx::query_as::<_, SessionRecord>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GatewayError::SessionNotFound(id))
    }

    /// Lists sessions by most recent update, optionally filtered by
    /// visibility.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_sessions(
        &self,
        limit: i64,
        offset: i64,
        is_public: Option<bool>,
    ) -> Result<Vec<SessionRecord>, GatewayError> {
        let records = if let Some(flag) = is_public {
            sqlx::query_as::<_, SessionRecord>(
                "SELECT * FROM sessions WHERE is_public = $3 \
                 ORDER BY updated_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .bind(flag)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, SessionRecord>(
                "SELECT * FROM sessions ORDER BY updated_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(records)
    }

    // ── Views ───────────────────────────────────────────────────────────

    /// Inserts a view row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure (including
    /// a missing session, surfaced as a foreign-key violation).
    pub async fn insert_view(&self, new: &NewView) -> Result<ViewRecord, GatewayError> {
        let record = sqlx::query_as::<_, ViewRecord>(
            "INSERT INTO views (id, session_id, stream_id, position_x, position_y, width, height, \
                                audio_enabled, blurred, visible) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(new.id)
        .bind(new.session_id)
        .bind(new.stream_id)
        .bind(new.position_x)
        .bind(new.position_y)
        .bind(new.width)
        .bind(new.height)
        .bind(new.audio_enabled)
        .bind(new.blurred)
        .bind(new.visible)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    /// Applies a partial update to a view row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ViewNotFound`] if no row matches.
    pub async fn update_view(
        &self,
        id: Uuid,
        patch: &ViewPatch,
    ) -> Result<ViewRecord, GatewayError> {
        sqlx::query_as::<_, ViewRecord>(
            "UPDATE views SET \
               stream_id = CASE WHEN $3 THEN NULL ELSE COALESCE($2, stream_id) END, \
               position_x = COALESCE($4, position_x), \
               position_y = COALESCE($5, position_y), \
               width = COALESCE($6, width), \
               height = COALESCE($7, height), \
               audio_enabled = COALESCE($8, audio_enabled), \
               blurred = COALESCE($9, blurred), \
               visible = COALESCE($10, visible) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.stream_id)
        .bind(patch.clear_stream)
        .bind(patch.position_x)
        .bind(patch.position_y)
        .bind(patch.width)
        .bind(patch.height)
        .bind(patch.audio_enabled)
        .bind(patch.blurred)
        .bind(patch.visible)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::ViewNotFound(id))
    }

    /// Deletes a view row, returning it so callers can resolve the
    /// owning session for event emission.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ViewNotFound`] if no row matches.
    pub async fn delete_view(&self, id: Uuid) -> Result<ViewRecord, GatewayError> {
        sqlx::query_as::<_, ViewRecord>("DELETE FROM views WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GatewayError::ViewNotFound(id))
    }

    /// Fetches a view by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ViewNotFound`] if no row matches.
    pub async fn get_view(&self, id: Uuid) -> Result<ViewRecord, GatewayError> {
        sqlx::query_as::<_, ViewRecord>("SELECT * FROM views WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GatewayError::ViewNotFound(id))
    }

    /// Lists a session's views in reading order (top-to-bottom,
    /// left-to-right).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_views_for_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<ViewRecord>, GatewayError> {
        let records = sqlx::query_as::<_, ViewRecord>(
            "SELECT * FROM views WHERE session_id = $1 ORDER BY position_y ASC, position_x ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    // ── Data Sources ────────────────────────────────────────────────────

    /// Inserts a data source row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn insert_source(&self, new: &NewSource) -> Result<SourceRecord, GatewayError> {
        let record = sqlx::query_as::<_, SourceRecord>(
            "INSERT INTO data_sources (id, name, kind, url, file_path, refresh_interval_secs, enabled) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(new.id)
        .bind(&new.name)
        .bind(&new.kind)
        .bind(&new.url)
        .bind(&new.file_path)
        .bind(new.refresh_interval_secs)
        .bind(new.enabled)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    /// Applies a partial update to a data source row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SourceNotFound`] if no row matches.
    pub async fn update_source(
        &self,
        id: Uuid,
        patch: &SourcePatch,
    ) -> Result<SourceRecord, GatewayError> {
        sqlx::query_as::<_, SourceRecord>(
            "UPDATE data_sources SET \
               name = COALESCE($2, name), \
               url = COALESCE($3, url), \
               file_path = COALESCE($4, file_path), \
               refresh_interval_secs = COALESCE($5, refresh_interval_secs), \
               enabled = COALESCE($6, enabled), \
               updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.url)
        .bind(&patch.file_path)
        .bind(patch.refresh_interval_secs)
        .bind(patch.enabled)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::SourceNotFound(id))
    }

    /// Deletes a data source row. Streams it contributed keep their rows
    /// with `source_id` nulled.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SourceNotFound`] if no row matches.
    pub async fn delete_source(&self, id: Uuid) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM data_sources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::SourceNotFound(id));
        }
        Ok(())
    }

    /// Fetches a data source by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SourceNotFound`] if no row matches.
    pub async fn get_source(&self, id: Uuid) -> Result<SourceRecord, GatewayError> {
        sqlx::query_as::<_, SourceRecord>("SELECT * FROM data_sources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GatewayError::SourceNotFound(id))
    }

    /// Lists all data sources, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_sources(&self) -> Result<Vec<SourceRecord>, GatewayError> {
        let records = sqlx::query_as::<_, SourceRecord>(
            "SELECT * FROM data_sources ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Stamps a source's `last_sync` with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SourceNotFound`] if no row matches.
    pub async fn touch_source_sync(&self, id: Uuid) -> Result<SourceRecord, GatewayError> {
        sqlx::query_as::<_, SourceRecord>(
            "UPDATE data_sources SET last_sync = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::SourceNotFound(id))
    }
}
