//! Access decisions produced by the policy engine.

use serde::{Deserialize, Serialize};

/// Why an authenticated caller was turned away from a protected zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    /// A staff member reached a student-only zone, or vice versa.
    RoleMismatch,
    /// A student reached a staff-only zone.
    InsufficientPrivilege,
}

impl DenialReason {
    /// Short machine-readable code, safe for logs and cookie values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoleMismatch => "role-mismatch",
            Self::InsufficientPrivilege => "insufficient-privilege",
        }
    }

    /// Human-readable notice shown after the forced logout.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::RoleMismatch => "Access denied. Invalid session.",
            Self::InsufficientPrivilege => "Access denied. Insufficient permissions.",
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoleMismatch => write!(f, "role mismatch"),
            Self::InsufficientPrivilege => write!(f, "insufficient privilege"),
        }
    }
}

/// What the request gate must do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// Let the request through to its handler.
    Allow,
    /// No usable session. Send the caller to the login page.
    RedirectToLogin,
    /// The caller's session must be destroyed before redirecting.
    /// Invalidation happens first so the dead session can never be
    /// replayed against another zone.
    RedirectToLoginAndInvalidateSession {
        /// Why the session is being destroyed.
        reason: DenialReason,
    },
}
