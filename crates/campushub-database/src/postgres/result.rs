//! Exam result store backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::record::ExamResult;

use crate::store::ResultStore;

/// PostgreSQL exam result store.
#[derive(Debug, Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    /// Create a new result store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn create(&self, result: &ExamResult) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO exam_results \
             (id, student_id, subject_id, marks_obtained, total_marks, grade, exam_date, exam_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(result.id)
        .bind(result.student_id)
        .bind(result.subject_id)
        .bind(result.marks_obtained)
        .bind(result.total_marks)
        .bind(result.grade)
        .bind(result.exam_date)
        .bind(&result.exam_type)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            super::map_insert_err(
                e,
                "A result for this subject and exam type already exists.",
                "exam result",
            )
        })?;

        Ok(())
    }

    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<ExamResult>> {
        sqlx::query_as::<_, ExamResult>(
            "SELECT * FROM exam_results WHERE student_id = $1 ORDER BY exam_date DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list results", e))
    }
}
