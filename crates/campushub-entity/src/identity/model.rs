//! Identity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A credential-holding account record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Identity {
    /// Unique identity identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
    /// When the identity was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Build a new identity with a fresh id and timestamps.
    pub fn new(
        username: impl Into<String>,
        email: Option<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            password_hash: password_hash.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim().to_string();
        if name.is_empty() {
            self.username.clone()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_falls_back_to_username() {
        let identity = Identity::new("alice", None, "", "", "hash", Role::Student);
        assert_eq!(identity.full_name(), "alice");

        let identity = Identity::new("bob", None, "Bob", "Barker", "hash", Role::Staff);
        assert_eq!(identity.full_name(), "Bob Barker");
    }
}
