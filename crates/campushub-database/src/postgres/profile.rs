//! Student profile store backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::profile::StudentProfile;

use crate::store::ProfileStore;

/// PostgreSQL student profile store.
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    /// Create a new profile store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn create(&self, profile: &StudentProfile) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO student_profiles \
             (id, identity_id, roll_number, phone, address, date_of_birth, course, semester, \
              profile_completed, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(profile.id)
        .bind(profile.identity_id)
        .bind(&profile.roll_number)
        .bind(&profile.phone)
        .bind(&profile.address)
        .bind(profile.date_of_birth)
        .bind(&profile.course)
        .bind(profile.semester)
        .bind(profile.profile_completed)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "Roll number already exists!", "profile"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StudentProfile>> {
        sqlx::query_as::<_, StudentProfile>("SELECT * FROM student_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    async fn find_by_identity(&self, identity_id: Uuid) -> AppResult<Option<StudentProfile>> {
        sqlx::query_as::<_, StudentProfile>(
            "SELECT * FROM student_profiles WHERE identity_id = $1",
        )
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find profile by identity", e)
        })
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<StudentProfile>> {
        sqlx::query_as::<_, StudentProfile>(
            "SELECT * FROM student_profiles WHERE roll_number = $1",
        )
        .bind(roll_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find profile by roll number", e)
        })
    }

    async fn list(&self) -> AppResult<Vec<StudentProfile>> {
        sqlx::query_as::<_, StudentProfile>(
            "SELECT * FROM student_profiles ORDER BY roll_number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list profiles", e))
    }

    async fn update(&self, profile: &StudentProfile) -> AppResult<()> {
        sqlx::query(
            "UPDATE student_profiles SET \
             phone = $2, address = $3, date_of_birth = $4, course = $5, semester = $6, \
             profile_completed = $7, updated_at = $8 \
             WHERE id = $1",
        )
        .bind(profile.id)
        .bind(&profile.phone)
        .bind(&profile.address)
        .bind(profile.date_of_birth)
        .bind(&profile.course)
        .bind(profile.semester)
        .bind(profile.profile_completed)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?;

        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM student_profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count profiles", e))
    }

    async fn count_by_completion(&self, completed: bool) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM student_profiles WHERE profile_completed = $1")
            .bind(completed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count profiles by state", e)
            })
    }
}
