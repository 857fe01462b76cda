//! Session store backed by PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::session::Session;

use crate::store::SessionStore;

/// PostgreSQL session store.
#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    /// Create a new session store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, session: &Session) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sessions (token, identity_id, created_at, last_seen_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&session.token)
        .bind(session.identity_id)
        .bind(session.created_at)
        .bind(session.last_seen_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;

        Ok(())
    }

    async fn touch(
        &self,
        token: &str,
        now: DateTime<Utc>,
        idle_lifetime: Duration,
    ) -> AppResult<Option<Session>> {
        // Single conditional write: the expiry guard and the refresh happen
        // in one statement so an expired session is never resurrected.
        sqlx::query_as::<_, Session>(
            "UPDATE sessions SET last_seen_at = $2, expires_at = $3 \
             WHERE token = $1 AND expires_at > $2 \
             RETURNING *",
        )
        .bind(token)
        .bind(now)
        .bind(now + idle_lifetime)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to refresh session", e))
    }

    async fn delete(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_identity(&self, identity_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE identity_id = $1")
            .bind(identity_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete identity sessions", e)
            })?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired sessions", e)
            })?;

        Ok(result.rows_affected())
    }
}
