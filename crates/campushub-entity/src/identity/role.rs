//! Identity role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of roles in the records system.
///
/// A `Student` identity always has exactly one linked profile; `Staff`
/// and `SuperUser` identities never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "identity_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Self-registered student account.
    Student,
    /// Administrative staff.
    Staff,
    /// Full administrator.
    SuperUser,
}

impl Role {
    /// Check whether this role grants access to the admin panel.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff | Self::SuperUser)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Staff => "staff",
            Self::SuperUser => "superuser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = campushub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "staff" => Ok(Self::Staff),
            "superuser" => Ok(Self::SuperUser),
            _ => Err(campushub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, staff, superuser"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_check() {
        assert!(!Role::Student.is_staff());
        assert!(Role::Staff.is_staff());
        assert!(Role::SuperUser.is_staff());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!("SuperUser".parse::<Role>().unwrap(), Role::SuperUser);
        assert!("admin".parse::<Role>().is_err());
    }
}
