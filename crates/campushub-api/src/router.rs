//! Route definitions for the CampusHub HTTP surface.
//!
//! Paths keep their trailing slashes; the zone table classifies them by
//! prefix, so `/student/dashboard/` and everything under `/admin-panel/`
//! pass through the request gate with their protection applied.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
///
/// The request gate is the innermost layer so it sees the final route
/// path; logging wraps everything.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(student_routes())
        .merge(admin_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::request_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Landing page and health check.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::home::health))
}

/// Login, logout, and registration.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/student/register/",
            get(handlers::auth::register_form).post(handlers::auth::register),
        )
        .route(
            "/student/login/",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route(
            "/student/logout/",
            get(handlers::auth::logout).post(handlers::auth::logout),
        )
        .route("/student/ajax-logout/", post(handlers::auth::ajax_logout))
}

/// Student-only pages.
fn student_routes() -> Router<AppState> {
    Router::new().route("/student/dashboard/", get(handlers::student::dashboard))
}

/// Staff-only admin panel.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-panel/", get(handlers::admin::overview))
        .route("/admin-panel/students/", get(handlers::admin::student_list))
        .route("/admin-panel/subjects/", get(handlers::admin::subject_list))
        .route(
            "/admin-panel/student/{id}/",
            get(handlers::admin::student_detail).post(handlers::admin::complete_profile),
        )
        .route(
            "/admin-panel/student/{id}/add-subject/",
            post(handlers::admin::add_subject),
        )
        .route(
            "/admin-panel/student/{id}/add-result/",
            post(handlers::admin::add_result),
        )
        .route(
            "/admin-panel/student/{id}/add-attendance/",
            post(handlers::admin::add_attendance),
        )
        .route(
            "/admin-panel/student/{id}/delete/",
            post(handlers::admin::delete_student),
        )
}
