//! Student self-registration.

use std::sync::Arc;

use tracing::info;

use campushub_auth::PasswordHasher;
use campushub_core::AppResult;
use campushub_core::error::AppError;
use campushub_database::store::{IdentityStore, ProfileStore};
use campushub_entity::identity::{Identity, Role};
use campushub_entity::profile::StudentProfile;

/// Input for a new student registration.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    /// Requested login name.
    pub username: String,
    /// Email address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Requested roll number.
    pub roll_number: String,
    /// Phone number.
    pub phone: Option<String>,
}

/// Creates student identities with their linked profiles.
///
/// Registration never creates a session; the new student signs in
/// through the normal login flow afterwards.
#[derive(Clone)]
pub struct RegistrationService {
    identities: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileStore>,
    hasher: PasswordHasher,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(identities: Arc<dyn IdentityStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            identities,
            profiles,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a new student.
    ///
    /// Fails with `Conflict` on a duplicate username or roll number.
    pub async fn register(&self, input: NewRegistration) -> AppResult<Identity> {
        if self
            .identities
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already exists."));
        }
        if self
            .profiles
            .find_by_roll_number(&input.roll_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Roll number already exists!"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let identity = Identity::new(
            input.username,
            input.email,
            input.first_name,
            input.last_name,
            password_hash,
            Role::Student,
        );
        self.identities.create(&identity).await?;

        let profile = StudentProfile::new(identity.id, input.roll_number, input.phone);
        if let Err(e) = self.profiles.create(&profile).await {
            // A concurrent registration won the roll number. Do not
            // leave the identity behind without a profile.
            let _ = self.identities.delete_cascade(identity.id).await;
            return Err(e);
        }

        info!(identity_id = %identity.id, roll_number = %profile.roll_number, "Student registered");

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_database::MemoryStore;
    use campushub_database::store::Stores;
    use campushub_core::error::ErrorKind;

    fn registration(username: &str, roll: &str) -> NewRegistration {
        NewRegistration {
            username: username.to_string(),
            email: Some(format!("{username}@example.edu")),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            password: "long-enough-pw".to_string(),
            roll_number: roll.to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_creates_identity_and_profile() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let service = RegistrationService::new(
            Arc::clone(&stores.identities),
            Arc::clone(&stores.profiles),
        );

        let identity = service.register(registration("alice", "R-001")).await.unwrap();
        assert_eq!(identity.role, Role::Student);

        let profile = stores
            .profiles
            .find_by_identity(identity.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.roll_number, "R-001");
        assert!(!profile.profile_completed);
    }

    #[tokio::test]
    async fn test_duplicate_roll_number_rejected() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let service = RegistrationService::new(
            Arc::clone(&stores.identities),
            Arc::clone(&stores.profiles),
        );

        service.register(registration("alice", "R-001")).await.unwrap();
        let err = service
            .register(registration("bob", "R-001"))
            .await
            .unwrap_err();
        assert!(err.is_kind(ErrorKind::Conflict));
        assert_eq!(err.message, "Roll number already exists!");

        // The losing registration must not leave an identity behind.
        assert!(
            stores
                .identities
                .find_by_username("bob")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let service = RegistrationService::new(
            Arc::clone(&stores.identities),
            Arc::clone(&stores.profiles),
        );

        service.register(registration("alice", "R-001")).await.unwrap();
        let err = service
            .register(registration("alice", "R-002"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Username already exists.");
    }
}
