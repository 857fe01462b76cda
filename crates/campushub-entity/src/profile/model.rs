//! Student profile entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Student-specific record linked one-to-one to a Student identity.
///
/// Created at registration with only the roll number filled in; an
/// administrator completes the remaining fields later.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The identity this profile belongs to.
    pub identity_id: Uuid,
    /// Unique roll number.
    pub roll_number: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Enrolled course.
    pub course: Option<String>,
    /// Current semester.
    pub semester: Option<i32>,
    /// Whether an administrator has completed the profile.
    pub profile_completed: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl StudentProfile {
    /// Build a fresh, incomplete profile for a newly registered student.
    pub fn new(identity_id: Uuid, roll_number: impl Into<String>, phone: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            identity_id,
            roll_number: roll_number.into(),
            phone,
            address: None,
            date_of_birth: None,
            course: None,
            semester: None,
            profile_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
