//! Admin-panel endpoints.
//!
//! Every route here lives in the staff-only zone; the gate has already
//! verified the caller's role before any handler runs.

use axum::Json;
use axum::extract::{Form, Path, State};
use uuid::Uuid;

use campushub_entity::profile::StudentProfile;
use campushub_entity::record::{AttendanceRecord, ExamResult, Grade};
use campushub_entity::subject::Subject;
use campushub_service::records::{NewAttendance, NewResult, ProfileUpdate};
use campushub_service::{AdminOverview, StudentDetail, StudentSummary};

use crate::dto::request::{
    AddAttendanceRequest, AddResultRequest, AddSubjectRequest, ProfileUpdateRequest, validated,
};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Headline counts for the admin panel landing page.
pub async fn overview(State(state): State<AppState>) -> ApiResult<Json<AdminOverview>> {
    Ok(Json(state.records.admin_overview().await?))
}

/// All registered students.
pub async fn student_list(State(state): State<AppState>) -> ApiResult<Json<Vec<StudentSummary>>> {
    Ok(Json(state.records.list_students().await?))
}

/// The subject catalog.
pub async fn subject_list(State(state): State<AppState>) -> ApiResult<Json<Vec<Subject>>> {
    Ok(Json(state.records.list_subjects().await?))
}

/// Full detail for one student.
pub async fn student_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<StudentDetail>> {
    Ok(Json(state.records.student_detail(id).await?))
}

/// Completes a student's profile.
pub async fn complete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<ProfileUpdateRequest>,
) -> ApiResult<Json<StudentProfile>> {
    let update = ProfileUpdate {
        phone: payload.phone.filter(|s| !s.trim().is_empty()),
        address: payload.address.filter(|s| !s.trim().is_empty()),
        date_of_birth: payload.date_of_birth,
        course: payload.course.filter(|s| !s.trim().is_empty()),
        semester: payload.semester,
    };
    Ok(Json(state.records.complete_profile(id, update).await?))
}

/// Enrolls a student in a subject.
pub async fn add_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<AddSubjectRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.records.enroll_subject(id, payload.subject_id).await?;
    Ok(Json(MessageResponse::new("Subject added successfully.")))
}

/// Records an exam result for a student.
pub async fn add_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<AddResultRequest>,
) -> ApiResult<Json<ExamResult>> {
    validated(&payload)?;

    let grade = payload
        .grade
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<Grade>)
        .transpose()?;

    let input = NewResult {
        subject_id: payload.subject_id,
        marks_obtained: payload.marks_obtained,
        total_marks: payload.total_marks,
        grade,
        exam_date: payload.exam_date,
        exam_type: payload.exam_type,
    };
    Ok(Json(state.records.add_result(id, input).await?))
}

/// Records monthly attendance for a student.
pub async fn add_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<AddAttendanceRequest>,
) -> ApiResult<Json<AttendanceRecord>> {
    validated(&payload)?;

    let input = NewAttendance {
        subject_id: payload.subject_id,
        total_classes: payload.total_classes,
        classes_attended: payload.classes_attended,
        month: payload.month,
        year: payload.year,
    };
    Ok(Json(state.records.add_attendance(id, input).await?))
}

/// Deletes a student and all their records and sessions.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state.records.delete_student(id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully.")))
}
