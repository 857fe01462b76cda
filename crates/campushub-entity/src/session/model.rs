//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session keyed by an opaque client-held token.
///
/// Sessions are created on login and destroyed on logout, idle expiry,
/// or forced invalidation by the request gate. The expiry window slides:
/// `expires_at = last_seen_at + idle_lifetime`, refreshed on every
/// authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Opaque token held by the client in a cookie.
    pub token: String,
    /// The identity this session belongs to.
    pub identity_id: Uuid,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Last request timestamp.
    pub last_seen_at: DateTime<Utc>,
    /// When the session expires unless refreshed first.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Build a fresh session for the given identity.
    pub fn new(token: impl Into<String>, identity_id: Uuid, idle_lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: token.into(),
            identity_id,
            created_at: now,
            last_seen_at: now,
            expires_at: now + idle_lifetime,
        }
    }

    /// Check whether the session has expired at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Slide the expiry window forward from the given instant.
    pub fn refreshed(mut self, now: DateTime<Utc>, idle_lifetime: Duration) -> Self {
        self.last_seen_at = now;
        self.expires_at = now + idle_lifetime;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_window() {
        let session = Session::new("tok", Uuid::new_v4(), Duration::seconds(3600));
        let now = session.created_at;
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::seconds(3600)));

        let later = now + Duration::seconds(1800);
        let refreshed = session.refreshed(later, Duration::seconds(3600));
        assert_eq!(refreshed.expires_at, later + Duration::seconds(3600));
        assert!(!refreshed.is_expired(now + Duration::seconds(3600)));
    }
}
