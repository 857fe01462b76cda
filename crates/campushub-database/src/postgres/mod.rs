//! PostgreSQL implementations of the store traits.

pub mod attendance;
pub mod identity;
pub mod profile;
pub mod result;
pub mod session;
pub mod subject;

use campushub_core::error::{AppError, ErrorKind};

/// Map an insert error, turning unique violations into `Conflict` with a
/// caller-supplied field-level message.
pub(crate) fn map_insert_err(e: sqlx::Error, conflict_msg: &str, what: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::conflict(conflict_msg),
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to insert {what}"), e),
    }
}
