//! # campushub-entity
//!
//! Domain entity models for CampusHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod identity;
pub mod profile;
pub mod record;
pub mod session;
pub mod subject;
