//! Auth context extractors.
//!
//! The request gate places an [`AuthContext`] into request extensions
//! when the caller holds a valid session. These extractors read it back
//! out in handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use campushub_auth::AuthContext;
use campushub_core::error::AppError;

use crate::error::ApiError;

/// Requires an authenticated caller.
///
/// Rejects with 401 when no context is present. On gated routes the
/// gate redirects first, so the rejection only fires on misrouted
/// public paths.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError(AppError::session("No active session")))
    }
}

/// Optionally-authenticated caller. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthContext>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<AuthContext>().cloned()))
    }
}
