//! Subject and enrollment store backed by PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::subject::{EnrolledSubject, Subject};

use crate::store::SubjectStore;

/// PostgreSQL subject store.
#[derive(Debug, Clone)]
pub struct PgSubjectStore {
    pool: PgPool,
}

impl PgSubjectStore {
    /// Create a new subject store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectStore for PgSubjectStore {
    async fn create(&self, subject: &Subject) -> AppResult<()> {
        sqlx::query("INSERT INTO subjects (id, name, code, credits) VALUES ($1, $2, $3, $4)")
            .bind(subject.id)
            .bind(&subject.name)
            .bind(&subject.code)
            .bind(subject.credits)
            .execute(&self.pool)
            .await
            .map_err(|e| super::map_insert_err(e, "Subject code already exists.", "subject"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find subject", e))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find subject by code", e)
            })
    }

    async fn list(&self) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subjects", e))
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count subjects", e))
    }

    async fn enroll(&self, student_id: Uuid, subject_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO enrollments (student_id, subject_id, enrolled_on) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (student_id, subject_id) DO NOTHING",
        )
        .bind(student_id)
        .bind(subject_id)
        .bind(Utc::now().date_naive())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enroll student", e))?;

        Ok(())
    }

    async fn subjects_for_student(&self, student_id: Uuid) -> AppResult<Vec<EnrolledSubject>> {
        sqlx::query_as::<_, EnrolledSubject>(
            "SELECT s.id, s.name, s.code, s.credits, e.enrolled_on \
             FROM subjects s JOIN enrollments e ON e.subject_id = s.id \
             WHERE e.student_id = $1 ORDER BY s.code",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list enrolled subjects", e)
        })
    }
}
