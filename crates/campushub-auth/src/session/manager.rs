//! Session lifecycle manager: login, resolution, invalidation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use campushub_core::AppResult;
use campushub_core::config::SessionConfig;
use campushub_core::error::AppError;
use campushub_database::store::{IdentityStore, ProfileStore, SessionStore};
use campushub_entity::session::Session;

use crate::context::AuthContext;
use crate::password::PasswordHasher;

use super::token::generate_token;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Opaque token to hand to the client in a cookie.
    pub token: String,
    /// The resolved context for the fresh session.
    pub context: AuthContext,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    identities: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileStore>,
    sessions: Arc<dyn SessionStore>,
    hasher: PasswordHasher,
    config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager over the given stores.
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        profiles: Arc<dyn ProfileStore>,
        sessions: Arc<dyn SessionStore>,
        config: SessionConfig,
    ) -> Self {
        Self {
            identities,
            profiles,
            sessions,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Find the identity by username
    /// 2. Verify the password
    /// 3. Mint an opaque token and persist the session
    ///
    /// Unknown usernames and wrong passwords produce the same generic
    /// error so the response never reveals whether an account exists.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let identity = match self.identities.find_by_username(username).await? {
            Some(identity) => identity,
            None => return Err(Self::invalid_credentials()),
        };

        if !self
            .hasher
            .verify_password(password, &identity.password_hash)?
        {
            return Err(Self::invalid_credentials());
        }

        let token = generate_token();
        let session = Session::new(&token, identity.id, self.config.idle_lifetime());
        self.sessions.create(&session).await?;

        let profile = self.profiles.find_by_identity(identity.id).await?;

        info!(identity_id = %identity.id, role = %identity.role, "Login successful");

        Ok(LoginOutcome {
            token,
            context: AuthContext {
                identity,
                profile,
                session,
            },
        })
    }

    /// Resolves a token to a live, freshly-slid session and its identity.
    ///
    /// Returns `Ok(None)` for any invalid session: unknown token, idle
    /// expiry, or an orphaned session whose identity has been deleted.
    /// Only store failures are errors.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<AuthContext>> {
        let now = Utc::now();
        let session = match self
            .sessions
            .touch(token, now, self.config.idle_lifetime())
            .await?
        {
            Some(session) => session,
            None => return Ok(None),
        };

        let identity = match self.identities.find_by_id(session.identity_id).await? {
            Some(identity) => identity,
            None => {
                // The identity was deleted out from under the session.
                warn!(identity_id = %session.identity_id, "Dropping orphaned session");
                self.sessions.delete(token).await?;
                return Ok(None);
            }
        };

        let profile = self.profiles.find_by_identity(identity.id).await?;

        Ok(Some(AuthContext {
            identity,
            profile,
            session,
        }))
    }

    /// Destroys a session. Returns `true` if one existed.
    pub async fn invalidate(&self, token: &str) -> AppResult<bool> {
        self.sessions.delete(token).await
    }

    fn invalid_credentials() -> AppError {
        AppError::authentication("Invalid username or password.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_database::MemoryStore;
    use campushub_database::store::Stores;
    use campushub_entity::identity::{Identity, Role};

    async fn manager_with_user(username: &str, password: &str) -> (SessionManager, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let stores = Stores::memory(Arc::clone(&store));

        let hash = PasswordHasher::new().hash_password(password).unwrap();
        let identity = Identity::new(username, None, "Test", "User", hash, Role::Student);
        stores.identities.create(&identity).await.unwrap();

        let manager = SessionManager::new(
            stores.identities,
            stores.profiles,
            stores.sessions,
            SessionConfig::default(),
        );
        (manager, store)
    }

    #[tokio::test]
    async fn test_login_and_resolve() {
        let (manager, _) = manager_with_user("alice", "hunter22222").await;

        let outcome = manager.login("alice", "hunter22222").await.unwrap();
        let context = manager.resolve(&outcome.token).await.unwrap().unwrap();
        assert_eq!(context.identity.username, "alice");
        assert!(context.is_student());
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let (manager, _) = manager_with_user("alice", "hunter22222").await;

        let unknown = manager.login("nobody", "whatever").await.unwrap_err();
        let wrong = manager.login("alice", "wrong-password").await.unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_expired_session_does_not_resolve() {
        let (manager, store) = manager_with_user("alice", "hunter22222").await;

        let outcome = manager.login("alice", "hunter22222").await.unwrap();
        store
            .set_session_expiry(&outcome.token, Utc::now() - chrono::Duration::seconds(1))
            .await;
        assert!(manager.resolve(&outcome.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_is_idempotent() {
        let (manager, _) = manager_with_user("alice", "hunter22222").await;

        let outcome = manager.login("alice", "hunter22222").await.unwrap();
        assert!(manager.invalidate(&outcome.token).await.unwrap());
        assert!(!manager.invalidate(&outcome.token).await.unwrap());
        assert!(manager.resolve(&outcome.token).await.unwrap().is_none());
    }
}
