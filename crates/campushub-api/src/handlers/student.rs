//! Student-facing endpoints.

use axum::Json;
use axum::extract::State;

use campushub_core::error::AppError;
use campushub_service::StudentDashboard;

use crate::error::{ApiError, ApiResult};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// The student dashboard: profile, subjects, results, attendance.
///
/// The gate guarantees the caller is a student with a profile before
/// this handler runs.
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(context): CurrentUser,
) -> ApiResult<Json<StudentDashboard>> {
    let profile = context
        .profile
        .as_ref()
        .ok_or_else(|| ApiError(AppError::session("No student profile")))?;

    let dashboard = state.dashboard.student_dashboard(profile).await?;
    Ok(Json(dashboard))
}
