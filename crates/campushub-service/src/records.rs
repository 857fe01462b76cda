//! Admin-panel workflows over student records.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::AppError;
use campushub_database::store::{
    AttendanceStore, IdentityStore, ProfileStore, ResultStore, SubjectStore,
};
use campushub_entity::identity::Identity;
use campushub_entity::profile::StudentProfile;
use campushub_entity::record::{AttendanceRecord, ExamResult, Grade};
use campushub_entity::subject::{EnrolledSubject, Subject};

/// Headline counts shown at the top of the admin panel.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    /// Registered students.
    pub total_students: i64,
    /// Students whose profile an administrator has not yet completed.
    pub pending_students: i64,
    /// Students with a completed profile.
    pub completed_students: i64,
    /// Subjects in the catalog.
    pub total_subjects: i64,
}

/// One row of the student list.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    /// The student's identity.
    pub identity: Identity,
    /// The student's profile.
    pub profile: StudentProfile,
}

/// Full view of one student for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    /// The student's identity.
    pub identity: Identity,
    /// The student's profile.
    pub profile: StudentProfile,
    /// Enrolled subjects.
    pub subjects: Vec<EnrolledSubject>,
    /// Exam results.
    pub results: Vec<ExamResult>,
    /// Attendance records.
    pub attendance: Vec<AttendanceRecord>,
}

/// Fields an administrator fills in to complete a profile.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
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

/// Input for recording an exam result.
#[derive(Debug, Clone)]
pub struct NewResult {
    /// The examined subject.
    pub subject_id: Uuid,
    /// Marks obtained, 0-100.
    pub marks_obtained: i32,
    /// Total marks for the exam.
    pub total_marks: i32,
    /// Awarded grade. Derived from the marks when absent.
    pub grade: Option<Grade>,
    /// Date the exam was held.
    pub exam_date: NaiveDate,
    /// Kind of exam.
    pub exam_type: String,
}

/// Input for recording monthly attendance.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    /// The attended subject.
    pub subject_id: Uuid,
    /// Classes held in the month.
    pub total_classes: i32,
    /// Classes the student attended.
    pub classes_attended: i32,
    /// Month name.
    pub month: String,
    /// Calendar year.
    pub year: i32,
}

/// Runs the admin-panel record workflows.
#[derive(Clone)]
pub struct RecordsService {
    identities: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileStore>,
    subjects: Arc<dyn SubjectStore>,
    results: Arc<dyn ResultStore>,
    attendance: Arc<dyn AttendanceStore>,
}

impl RecordsService {
    /// Creates a new records service.
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        profiles: Arc<dyn ProfileStore>,
        subjects: Arc<dyn SubjectStore>,
        results: Arc<dyn ResultStore>,
        attendance: Arc<dyn AttendanceStore>,
    ) -> Self {
        Self {
            identities,
            profiles,
            subjects,
            results,
            attendance,
        }
    }

    /// Headline counts for the admin panel landing page.
    pub async fn admin_overview(&self) -> AppResult<AdminOverview> {
        Ok(AdminOverview {
            total_students: self.profiles.count().await?,
            pending_students: self.profiles.count_by_completion(false).await?,
            completed_students: self.profiles.count_by_completion(true).await?,
            total_subjects: self.subjects.count().await?,
        })
    }

    /// All students with their identities, ordered by roll number.
    pub async fn list_students(&self) -> AppResult<Vec<StudentSummary>> {
        let profiles = self.profiles.list().await?;
        let mut students = Vec::with_capacity(profiles.len());
        for profile in profiles {
            // A profile without an identity means a cascade delete is
            // mid-flight; skip the row rather than failing the page.
            if let Some(identity) = self.identities.find_by_id(profile.identity_id).await? {
                students.push(StudentSummary { identity, profile });
            }
        }
        Ok(students)
    }

    /// The full subject catalog, ordered by code.
    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.subjects.list().await
    }

    /// Full detail for one student.
    pub async fn student_detail(&self, student_id: Uuid) -> AppResult<StudentDetail> {
        let profile = self.require_profile(student_id).await?;
        let identity = self
            .identities
            .find_by_id(profile.identity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let subjects = self.subjects.subjects_for_student(profile.id).await?;
        let results = self.results.list_for_student(profile.id).await?;
        let attendance = self.attendance.list_for_student(profile.id).await?;

        Ok(StudentDetail {
            identity,
            profile,
            subjects,
            results,
            attendance,
        })
    }

    /// Fills in the administrative profile fields and marks the profile
    /// completed.
    pub async fn complete_profile(
        &self,
        student_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<StudentProfile> {
        let mut profile = self.require_profile(student_id).await?;

        profile.phone = update.phone;
        profile.address = update.address;
        profile.date_of_birth = update.date_of_birth;
        profile.course = update.course;
        profile.semester = update.semester;
        profile.profile_completed = true;
        profile.updated_at = Utc::now();

        self.profiles.update(&profile).await?;
        info!(student_id = %profile.id, "Profile completed");

        Ok(profile)
    }

    /// Enrolls a student in a subject. Already-enrolled is a no-op.
    pub async fn enroll_subject(&self, student_id: Uuid, subject_id: Uuid) -> AppResult<()> {
        let profile = self.require_profile(student_id).await?;
        self.require_subject(subject_id).await?;
        self.subjects.enroll(profile.id, subject_id).await
    }

    /// Records an exam result, deriving the grade when none was given.
    pub async fn add_result(&self, student_id: Uuid, input: NewResult) -> AppResult<ExamResult> {
        let profile = self.require_profile(student_id).await?;
        self.require_subject(input.subject_id).await?;

        if !(0..=100).contains(&input.marks_obtained) {
            return Err(AppError::validation("Marks must be between 0 and 100."));
        }

        let result = ExamResult {
            id: Uuid::new_v4(),
            student_id: profile.id,
            subject_id: input.subject_id,
            marks_obtained: input.marks_obtained,
            total_marks: input.total_marks,
            grade: input
                .grade
                .unwrap_or_else(|| Grade::from_marks(input.marks_obtained)),
            exam_date: input.exam_date,
            exam_type: input.exam_type,
        };
        self.results.create(&result).await?;

        Ok(result)
    }

    /// Records monthly attendance, deriving the percentage.
    pub async fn add_attendance(
        &self,
        student_id: Uuid,
        input: NewAttendance,
    ) -> AppResult<AttendanceRecord> {
        let profile = self.require_profile(student_id).await?;
        self.require_subject(input.subject_id).await?;

        if input.classes_attended > input.total_classes || input.classes_attended < 0 {
            return Err(AppError::validation(
                "Classes attended cannot exceed classes held.",
            ));
        }

        let record = AttendanceRecord::new(
            profile.id,
            input.subject_id,
            input.total_classes,
            input.classes_attended,
            input.month,
            input.year,
        );
        self.attendance.create(&record).await?;

        Ok(record)
    }

    /// Deletes a student and everything attached to them, including any
    /// live sessions.
    pub async fn delete_student(&self, student_id: Uuid) -> AppResult<()> {
        let profile = self.require_profile(student_id).await?;
        self.identities.delete_cascade(profile.identity_id).await?;
        info!(student_id = %profile.id, identity_id = %profile.identity_id, "Student deleted");
        Ok(())
    }

    async fn require_profile(&self, student_id: Uuid) -> AppResult<StudentProfile> {
        self.profiles
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))
    }

    async fn require_subject(&self, subject_id: Uuid) -> AppResult<()> {
        self.subjects
            .find_by_id(subject_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Subject not found"))
    }
}
