//! Student dashboard assembly.

use std::sync::Arc;

use serde::Serialize;

use campushub_core::AppResult;
use campushub_database::store::{AttendanceStore, ResultStore, SubjectStore};
use campushub_entity::profile::StudentProfile;
use campushub_entity::record::{AttendanceRecord, ExamResult};
use campushub_entity::subject::EnrolledSubject;

/// Everything a student sees on their dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    /// The student's own profile.
    pub profile: StudentProfile,
    /// Enrolled subjects with enrollment dates.
    pub subjects: Vec<EnrolledSubject>,
    /// Exam results, newest first.
    pub results: Vec<ExamResult>,
    /// Monthly attendance summaries.
    pub attendance: Vec<AttendanceRecord>,
}

/// Assembles the student dashboard from the record stores.
#[derive(Clone)]
pub struct DashboardService {
    subjects: Arc<dyn SubjectStore>,
    results: Arc<dyn ResultStore>,
    attendance: Arc<dyn AttendanceStore>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        subjects: Arc<dyn SubjectStore>,
        results: Arc<dyn ResultStore>,
        attendance: Arc<dyn AttendanceStore>,
    ) -> Self {
        Self {
            subjects,
            results,
            attendance,
        }
    }

    /// Builds the dashboard for the given student profile.
    pub async fn student_dashboard(&self, profile: &StudentProfile) -> AppResult<StudentDashboard> {
        let subjects = self.subjects.subjects_for_student(profile.id).await?;
        let results = self.results.list_for_student(profile.id).await?;
        let attendance = self.attendance.list_for_student(profile.id).await?;

        Ok(StudentDashboard {
            profile: profile.clone(),
            subjects,
            results,
            attendance,
        })
    }
}
