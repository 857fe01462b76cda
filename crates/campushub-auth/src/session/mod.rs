//! Session lifecycle: opaque tokens, login, resolution, invalidation,
//! and the expired-session sweep.

mod cleanup;
mod manager;
mod token;

pub use cleanup::SessionCleanup;
pub use manager::{LoginOutcome, SessionManager};
pub use token::generate_token;
