//! Authenticated request context.

use campushub_entity::identity::{Identity, Role};
use campushub_entity::profile::StudentProfile;
use campushub_entity::session::Session;

/// Everything known about the caller once their session has resolved.
///
/// Built by the session manager on every authenticated request and
/// carried through the request gate into handlers.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The authenticated identity.
    pub identity: Identity,
    /// The linked student profile, present only for student identities.
    pub profile: Option<StudentProfile>,
    /// The live session backing this request.
    pub session: Session,
}

impl AuthContext {
    /// Whether the caller holds the student role.
    pub fn is_student(&self) -> bool {
        self.identity.role == Role::Student
    }

    /// Whether the caller holds a staff or superuser role.
    pub fn is_staff(&self) -> bool {
        self.identity.role.is_staff()
    }

    /// The landing page for this caller's role.
    pub fn home_path(&self) -> &'static str {
        if self.is_staff() {
            "/admin-panel/"
        } else {
            "/student/dashboard/"
        }
    }
}
