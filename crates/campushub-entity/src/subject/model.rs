//! Subject and enrollment entity models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A subject offered by the institution.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: Uuid,
    /// Subject name.
    pub name: String,
    /// Unique subject code (e.g. `MATH101`).
    pub code: String,
    /// Credit hours.
    pub credits: i32,
}

impl Subject {
    /// Build a new subject with a fresh id.
    pub fn new(name: impl Into<String>, code: impl Into<String>, credits: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            credits,
        }
    }
}

/// Links a student profile to a subject. Unique per (student, subject).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    /// The enrolled student profile.
    pub student_id: Uuid,
    /// The subject.
    pub subject_id: Uuid,
    /// Date the enrollment was recorded.
    pub enrolled_on: NaiveDate,
}

/// A subject joined with its enrollment date, as shown on dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EnrolledSubject {
    /// The subject.
    #[sqlx(flatten)]
    pub subject: Subject,
    /// Date the enrollment was recorded.
    pub enrolled_on: NaiveDate,
}
