//! Identity store backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::identity::Identity;

use crate::store::IdentityStore;

/// PostgreSQL identity store.
#[derive(Debug, Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    /// Create a new identity store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn create(&self, identity: &Identity) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO identities \
             (id, username, email, first_name, last_name, password_hash, role, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(identity.id)
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.password_hash)
        .bind(identity.role)
        .bind(identity.created_at)
        .bind(identity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "Username already exists.", "identity"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        sqlx::query_as::<_, Identity>("SELECT * FROM identities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find identity by id", e)
            })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Identity>> {
        sqlx::query_as::<_, Identity>(
            "SELECT * FROM identities WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find identity by username", e)
        })
    }

    async fn delete_cascade(&self, id: Uuid) -> AppResult<bool> {
        // Child rows (profile, enrollments, results, attendance, sessions)
        // go with the identity via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM identities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete identity", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
