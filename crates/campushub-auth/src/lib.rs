//! # campushub-auth
//!
//! Authentication and authorization for CampusHub: Argon2id password
//! hashing, opaque-token sliding sessions, and the access policy engine
//! that decides what every request may do.

pub mod context;
pub mod password;
pub mod policy;
pub mod session;

pub use context::AuthContext;
pub use password::PasswordHasher;
pub use policy::{AccessDecision, DenialReason, LOGIN_PATH, PolicyEngine, Zone, ZoneTable};
pub use session::{SessionCleanup, SessionManager};
