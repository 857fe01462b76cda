//! The request gate.
//!
//! Runs on every request, in order: resolve the session cookie, classify
//! the path into a zone, ask the policy engine for a decision, then
//! enforce it. When a decision calls for session destruction, the store
//! delete completes before the redirect is produced; a failed delete
//! fails the request rather than leaking a live session.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::warn;

use campushub_auth::{AccessDecision, AuthContext, LOGIN_PATH, Zone};
use campushub_core::config::AppConfig;

use crate::error::ApiError;
use crate::flash::set_flash;
use crate::state::AppState;

/// Enforces the access policy on one request.
pub async fn request_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let zone = state.zones.classify(request.uri().path());

    let context = match resolve_context(&state, &jar).await {
        Ok(context) => context,
        Err(e) => return ApiError(e).into_response(),
    };

    match state.engine.decide(zone, context.as_ref()) {
        AccessDecision::Allow => {
            if let Some(context) = context {
                request.extensions_mut().insert(context);
            }
            let mut response = next.run(request).await;
            if zone != Zone::Public {
                apply_cache_suppression(response.headers_mut());
            }
            response
        }
        AccessDecision::RedirectToLogin => {
            let mut response = Redirect::to(LOGIN_PATH).into_response();
            apply_cache_suppression(response.headers_mut());
            response
        }
        AccessDecision::RedirectToLoginAndInvalidateSession { reason } => {
            if let Some(context) = &context {
                if let Err(e) = state.sessions.invalidate(&context.session.token).await {
                    return ApiError(e).into_response();
                }
                warn!(
                    identity_id = %context.identity.id,
                    role = %context.identity.role,
                    path = %request.uri().path(),
                    reason = %reason,
                    "Session invalidated by access policy"
                );
            }
            let jar = jar.remove(clear_session_cookie(&state.config));
            let jar = set_flash(jar, reason.code());
            let mut response = (jar, Redirect::to(LOGIN_PATH)).into_response();
            apply_cache_suppression(response.headers_mut());
            response
        }
    }
}

/// Resolves the session cookie to a caller context, if any.
async fn resolve_context(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<AuthContext>, campushub_core::AppError> {
    let token = match jar.get(&state.config.session.cookie_name) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok(None),
    };
    state.sessions.resolve(&token).await
}

/// Builds the session cookie carrying a fresh token.
pub fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.session.cookie_secure)
        .build()
}

/// Builds a removal cookie matching the session cookie's attributes.
pub fn clear_session_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((config.session.cookie_name.clone(), ""))
        .path("/")
        .build()
}

/// Stamps the response so no intermediary or browser caches it.
///
/// Applied to every response outside the Public zone and to logout
/// redirects, so a back button after logout never replays a page that
/// was rendered for an authenticated caller.
pub fn apply_cache_suppression(headers: &mut HeaderMap) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, private"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_suppression_headers() {
        let mut headers = HeaderMap::new();
        apply_cache_suppression(&mut headers);
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-store, no-cache, must-revalidate, private"
        );
        assert_eq!(headers.get(header::PRAGMA).unwrap(), "no-cache");
        assert_eq!(headers.get(header::EXPIRES).unwrap(), "0");
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }
}
