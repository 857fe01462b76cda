//! Attendance record store backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::{AppError, ErrorKind};
use campushub_entity::record::AttendanceRecord;

use crate::store::AttendanceStore;

/// PostgreSQL attendance store.
#[derive(Debug, Clone)]
pub struct PgAttendanceStore {
    pool: PgPool,
}

impl PgAttendanceStore {
    /// Create a new attendance store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for PgAttendanceStore {
    async fn create(&self, record: &AttendanceRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO attendance_records \
             (id, student_id, subject_id, total_classes, classes_attended, \
              attendance_percentage, month, year) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(record.id)
        .bind(record.student_id)
        .bind(record.subject_id)
        .bind(record.total_classes)
        .bind(record.classes_attended)
        .bind(record.attendance_percentage)
        .bind(&record.month)
        .bind(record.year)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            super::map_insert_err(
                e,
                "Attendance for this subject and month is already recorded.",
                "attendance record",
            )
        })?;

        Ok(())
    }

    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<AttendanceRecord>> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance_records WHERE student_id = $1 ORDER BY year DESC, month",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list attendance records", e)
        })
    }
}
