//! Access policy: zone classification and the pure decision engine.

mod decision;
mod engine;
mod zone;

pub use decision::{AccessDecision, DenialReason};
pub use engine::PolicyEngine;
pub use zone::{LOGIN_PATH, Zone, ZoneTable};
