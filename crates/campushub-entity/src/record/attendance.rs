//! Monthly attendance entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A monthly attendance summary. Unique per (student, subject, month, year).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The student profile this record belongs to.
    pub student_id: Uuid,
    /// The attended subject.
    pub subject_id: Uuid,
    /// Classes held in the month.
    pub total_classes: i32,
    /// Classes the student attended.
    pub classes_attended: i32,
    /// Derived percentage, always recomputed from the counts.
    pub attendance_percentage: f64,
    /// Month name (e.g. `January`).
    pub month: String,
    /// Calendar year.
    pub year: i32,
}

impl AttendanceRecord {
    /// Build a record, deriving the percentage from the counts.
    pub fn new(
        student_id: Uuid,
        subject_id: Uuid,
        total_classes: i32,
        classes_attended: i32,
        month: impl Into<String>,
        year: i32,
    ) -> Self {
        let percentage = if total_classes > 0 {
            (classes_attended as f64 / total_classes as f64) * 100.0
        } else {
            0.0
        };
        Self {
            id: Uuid::new_v4(),
            student_id,
            subject_id,
            total_classes,
            classes_attended,
            attendance_percentage: percentage,
            month: month.into(),
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_is_derived() {
        let record = AttendanceRecord::new(Uuid::new_v4(), Uuid::new_v4(), 20, 15, "March", 2025);
        assert!((record.attendance_percentage - 75.0).abs() < f64::EPSILON);
    }
}
