//! Expired session cleanup.

use std::sync::Arc;

use tracing::{error, info};

use campushub_core::AppResult;
use campushub_database::store::SessionStore;

/// Handles periodic removal of expired session rows.
///
/// The request path never serves an expired session (the refresh is a
/// conditional write), so the sweep is purely about reclaiming storage.
#[derive(Clone)]
pub struct SessionCleanup {
    /// Session store to sweep.
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionCleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCleanup").finish()
    }
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Runs one cleanup cycle.
    ///
    /// Returns the number of sessions removed.
    pub async fn run_cleanup(&self) -> AppResult<u64> {
        let removed = self.sessions.purge_expired(chrono::Utc::now()).await?;

        if removed > 0 {
            info!(removed, "Expired sessions purged");
        }

        Ok(removed)
    }

    /// Runs cleanup cycles forever at the given interval.
    pub async fn run_periodic(self, interval: std::time::Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Err(e) = self.run_cleanup().await {
                error!(error = %e, "Session cleanup cycle failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_database::MemoryStore;
    use campushub_entity::session::Session;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_cleanup_removes_only_expired_sessions() {
        let store = Arc::new(MemoryStore::new());
        let live = Session::new("live", Uuid::new_v4(), Duration::seconds(3600));
        let dead = Session::new("dead", Uuid::new_v4(), Duration::seconds(3600));
        SessionStore::create(&*store, &live).await.unwrap();
        SessionStore::create(&*store, &dead).await.unwrap();
        assert!(store.set_session_expiry("dead", Utc::now() - Duration::seconds(1)).await);

        let cleanup = SessionCleanup::new(Arc::clone(&store) as Arc<dyn SessionStore>);
        assert_eq!(cleanup.run_cleanup().await.unwrap(), 1);
        assert_eq!(store.session_count().await, 1);

        // A second cycle finds nothing left to remove.
        assert_eq!(cleanup.run_cleanup().await.unwrap(), 0);
    }
}
