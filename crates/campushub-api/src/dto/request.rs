//! Request payloads with validation rules.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use campushub_core::error::AppError;

/// Login form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Student registration form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Requested login name.
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Password, at least 8 characters.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Must match `password`.
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    /// Requested roll number.
    #[validate(length(min = 1, message = "Roll number is required"))]
    pub roll_number: String,
    /// Phone number.
    pub phone: Option<String>,
}

/// Profile completion form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateRequest {
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
}

/// Enrollment form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSubjectRequest {
    /// The subject to enroll in.
    pub subject_id: Uuid,
}

/// Exam result form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddResultRequest {
    /// The examined subject.
    pub subject_id: Uuid,
    /// Marks obtained, 0-100.
    #[validate(range(min = 0, max = 100, message = "Marks must be between 0 and 100"))]
    pub marks_obtained: i32,
    /// Total marks for the exam.
    #[validate(range(min = 1, message = "Total marks must be positive"))]
    pub total_marks: i32,
    /// Awarded grade label. Derived from the marks when absent.
    pub grade: Option<String>,
    /// Date the exam was held.
    pub exam_date: NaiveDate,
    /// Kind of exam.
    #[validate(length(min = 1, message = "Exam type is required"))]
    pub exam_type: String,
}

/// Attendance form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddAttendanceRequest {
    /// The attended subject.
    pub subject_id: Uuid,
    /// Classes held in the month.
    #[validate(range(min = 0, message = "Classes held cannot be negative"))]
    pub total_classes: i32,
    /// Classes the student attended.
    #[validate(range(min = 0, message = "Classes attended cannot be negative"))]
    pub classes_attended: i32,
    /// Month name.
    #[validate(length(min = 1, message = "Month is required"))]
    pub month: String,
    /// Calendar year.
    pub year: i32,
}

/// Runs validator rules and folds failures into one `Validation` error.
pub fn validated<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: Some("alice@example.edu".to_string()),
            first_name: "Alice".to_string(),
            last_name: "Ames".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            roll_number: "R-001".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_password_rules() {
        assert!(validated(&register("long-enough", "long-enough")).is_ok());
        assert!(validated(&register("short", "short")).is_err());
        assert!(validated(&register("long-enough", "different-pw")).is_err());
    }
}
