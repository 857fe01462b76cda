//! Login, logout, and registration handlers.

use axum::Json;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use campushub_auth::LOGIN_PATH;
use campushub_core::error::ErrorKind;
use campushub_service::NewRegistration;

use crate::dto::request::{LoginRequest, RegisterRequest, validated};
use crate::dto::response::{LoginPageResponse, LogoutResponse};
use crate::error::ApiError;
use crate::extractors::MaybeUser;
use crate::flash::{set_flash, take_flash};
use crate::middleware::gate::{apply_cache_suppression, clear_session_cookie, session_cookie};
use crate::state::AppState;

/// Serves the login page, consuming any pending notice.
///
/// An already-authenticated caller is sent straight to their landing
/// page instead.
pub async fn login_form(user: MaybeUser, jar: CookieJar) -> Response {
    if let MaybeUser(Some(context)) = user {
        return Redirect::to(context.home_path()).into_response();
    }
    let (jar, notice) = take_flash(jar);
    (jar, Json(LoginPageResponse { notice })).into_response()
}

/// Processes a login attempt.
///
/// An already-authenticated caller keeps their existing session; no new
/// one is minted. Credential failures set a generic notice that never
/// reveals whether the username exists.
pub async fn login(
    State(state): State<AppState>,
    user: MaybeUser,
    jar: CookieJar,
    Form(payload): Form<LoginRequest>,
) -> Response {
    if let MaybeUser(Some(context)) = user {
        return Redirect::to(context.home_path()).into_response();
    }

    match state
        .sessions
        .login(&payload.username, &payload.password)
        .await
    {
        Ok(outcome) => {
            let home = outcome.context.home_path();
            let jar = jar.add(session_cookie(&state.config, outcome.token));
            (jar, Redirect::to(home)).into_response()
        }
        Err(e) if e.is_kind(ErrorKind::Authentication) => {
            let jar = set_flash(jar, "invalid-credentials");
            (jar, Redirect::to(LOGIN_PATH)).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// Logs the caller out and redirects to the landing page.
///
/// Idempotent: a missing or dead session still produces the same
/// redirect. The response is stamped uncacheable so the back button
/// cannot replay an authenticated page.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        let token = cookie.value().to_string();
        match state.sessions.invalidate(&token).await {
            Ok(destroyed) => {
                if destroyed {
                    info!("Session destroyed on logout");
                }
            }
            Err(e) => return ApiError(e).into_response(),
        }
    }

    let jar = jar.remove(clear_session_cookie(&state.config));
    let jar = set_flash(jar, "logged-out");
    let mut response = (jar, Redirect::to("/")).into_response();
    apply_cache_suppression(response.headers_mut());
    response
}

/// JSON logout for script-driven clients.
pub async fn ajax_logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let destroyed = match jar.get(&state.config.session.cookie_name) {
        Some(cookie) => {
            let token = cookie.value().to_string();
            match state.sessions.invalidate(&token).await {
                Ok(destroyed) => destroyed,
                Err(e) => return ApiError(e).into_response(),
            }
        }
        None => false,
    };

    let jar = jar.remove(clear_session_cookie(&state.config));
    let body = LogoutResponse {
        success: destroyed,
        message: if destroyed {
            "Logged out successfully.".to_string()
        } else {
            "No active session.".to_string()
        },
        redirect_url: "/".to_string(),
    };
    let mut response = (jar, Json(body)).into_response();
    apply_cache_suppression(response.headers_mut());
    response
}

/// Serves the registration page, consuming any pending notice.
pub async fn register_form(user: MaybeUser, jar: CookieJar) -> Response {
    if let MaybeUser(Some(context)) = user {
        return Redirect::to(context.home_path()).into_response();
    }
    let (jar, notice) = take_flash(jar);
    (jar, Json(LoginPageResponse { notice })).into_response()
}

/// Processes a student registration.
///
/// Success never creates a session; the new student is sent to the
/// login page with a notice instead.
pub async fn register(
    State(state): State<AppState>,
    user: MaybeUser,
    jar: CookieJar,
    Form(payload): Form<RegisterRequest>,
) -> Response {
    if let MaybeUser(Some(context)) = user {
        return Redirect::to(context.home_path()).into_response();
    }

    if let Err(e) = validated(&payload) {
        return ApiError(e).into_response();
    }

    let registration = NewRegistration {
        username: payload.username,
        email: payload.email.filter(|s| !s.trim().is_empty()),
        first_name: payload.first_name,
        last_name: payload.last_name,
        password: payload.password,
        roll_number: payload.roll_number,
        phone: payload.phone.filter(|s| !s.trim().is_empty()),
    };

    match state.registration.register(registration).await {
        Ok(_) => {
            let jar = set_flash(jar, "registered");
            (jar, Redirect::to(LOGIN_PATH)).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}
