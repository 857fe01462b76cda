//! The pure access decision function.

use crate::context::AuthContext;

use super::decision::{AccessDecision, DenialReason};
use super::zone::Zone;

/// Decides what to do with a request given its zone and resolved caller.
///
/// Pure over its inputs. The request gate owns every side effect the
/// decision calls for (session destruction, redirects, headers).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine;

impl PolicyEngine {
    /// Creates a new policy engine.
    pub fn new() -> Self {
        Self
    }

    /// Produces the access decision for one request.
    pub fn decide(&self, zone: Zone, context: Option<&AuthContext>) -> AccessDecision {
        match zone {
            Zone::Public => AccessDecision::Allow,
            Zone::StudentOnly => match context {
                None => AccessDecision::RedirectToLogin,
                Some(ctx) if ctx.is_student() && ctx.profile.is_some() => AccessDecision::Allow,
                // Staff in a student zone, or a student identity whose
                // profile record is missing, holds a session that is
                // wrong for this zone. It gets destroyed.
                Some(_) => AccessDecision::RedirectToLoginAndInvalidateSession {
                    reason: DenialReason::RoleMismatch,
                },
            },
            Zone::StaffOnly => match context {
                None => AccessDecision::RedirectToLogin,
                Some(ctx) if ctx.is_staff() => AccessDecision::Allow,
                Some(_) => AccessDecision::RedirectToLoginAndInvalidateSession {
                    reason: DenialReason::InsufficientPrivilege,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_entity::identity::{Identity, Role};
    use campushub_entity::profile::StudentProfile;
    use campushub_entity::session::Session;
    use chrono::Duration;

    fn context(role: Role, with_profile: bool) -> AuthContext {
        let identity = Identity::new("caller", None, "Test", "Caller", "hash", role);
        let profile = with_profile
            .then(|| StudentProfile::new(identity.id, "R-001", None));
        let session = Session::new("tok", identity.id, Duration::seconds(3600));
        AuthContext {
            identity,
            profile,
            session,
        }
    }

    #[test]
    fn test_public_always_allows() {
        let engine = PolicyEngine::new();
        assert_eq!(engine.decide(Zone::Public, None), AccessDecision::Allow);
        assert_eq!(
            engine.decide(Zone::Public, Some(&context(Role::Staff, false))),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_protected_without_session_redirects() {
        let engine = PolicyEngine::new();
        assert_eq!(
            engine.decide(Zone::StudentOnly, None),
            AccessDecision::RedirectToLogin
        );
        assert_eq!(
            engine.decide(Zone::StaffOnly, None),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_matching_roles_allow() {
        let engine = PolicyEngine::new();
        assert_eq!(
            engine.decide(Zone::StudentOnly, Some(&context(Role::Student, true))),
            AccessDecision::Allow
        );
        assert_eq!(
            engine.decide(Zone::StaffOnly, Some(&context(Role::Staff, false))),
            AccessDecision::Allow
        );
        assert_eq!(
            engine.decide(Zone::StaffOnly, Some(&context(Role::SuperUser, false))),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_staff_in_student_zone_invalidates() {
        let engine = PolicyEngine::new();
        assert_eq!(
            engine.decide(Zone::StudentOnly, Some(&context(Role::Staff, false))),
            AccessDecision::RedirectToLoginAndInvalidateSession {
                reason: DenialReason::RoleMismatch
            }
        );
    }

    #[test]
    fn test_student_without_profile_invalidates() {
        let engine = PolicyEngine::new();
        assert_eq!(
            engine.decide(Zone::StudentOnly, Some(&context(Role::Student, false))),
            AccessDecision::RedirectToLoginAndInvalidateSession {
                reason: DenialReason::RoleMismatch
            }
        );
    }

    #[test]
    fn test_student_in_staff_zone_invalidates() {
        let engine = PolicyEngine::new();
        assert_eq!(
            engine.decide(Zone::StaffOnly, Some(&context(Role::Student, true))),
            AccessDecision::RedirectToLoginAndInvalidateSession {
                reason: DenialReason::InsufficientPrivilege
            }
        );
    }
}
