//! Shared fixtures for the integration test suite.
//!
//! Everything runs against the in-memory store backend, so the full
//! HTTP stack (router, gate, handlers) is exercised without PostgreSQL.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::{DateTime, Utc};
use tower::ServiceExt;

use campushub_api::{AppState, build_router};
use campushub_auth::PasswordHasher;
use campushub_core::config::AppConfig;
use campushub_database::MemoryStore;
use campushub_database::store::{IdentityStore, SubjectStore};
use campushub_entity::identity::{Identity, Role};
use campushub_entity::subject::Subject;

/// The application under test plus a handle into its store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub config: AppConfig,
}

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The value of the first `Set-Cookie` header starting with `name=`.
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{name}=")))
            .and_then(|v| v.split(';').next())
            .map(|v| v.to_string())
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    /// Build an app over a fresh in-memory store.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = "memory".to_string();

        let store = Arc::new(MemoryStore::new());
        let stores = campushub_database::store::Stores::memory(Arc::clone(&store));
        let state = AppState::build(config.clone(), stores);
        let router = build_router(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Send one request through the full router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        form: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }

    /// Register a student through the HTTP endpoint.
    pub async fn register_student(&self, username: &str, roll: &str) -> TestResponse {
        let form = format!(
            "username={username}&email={username}%40example.edu&first_name=Test&last_name=Student\
             &password=long-enough-pw&confirm_password=long-enough-pw&roll_number={roll}&phone="
        );
        self.request("POST", "/student/register/", Some(&form), None)
            .await
    }

    /// Log in through the HTTP endpoint, returning the session cookie
    /// as a `name=value` pair.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let form = format!("username={username}&password={password}");
        let response = self
            .request("POST", "/student/login/", Some(&form), None)
            .await;
        response
            .set_cookie(&self.config.session.cookie_name)
            .expect("login did not set a session cookie")
    }

    /// Insert a staff identity directly into the store.
    pub async fn create_staff(&self, username: &str, password: &str, superuser: bool) {
        let hash = PasswordHasher::new().hash_password(password).unwrap();
        let role = if superuser {
            Role::SuperUser
        } else {
            Role::Staff
        };
        let identity = Identity::new(username, None, "Staff", "Member", hash, role);
        IdentityStore::create(&*self.store, &identity).await.unwrap();
    }

    /// Insert a subject directly into the store, returning its id.
    pub async fn create_subject(&self, name: &str, code: &str) -> uuid::Uuid {
        let subject = Subject::new(name, code, 4);
        SubjectStore::create(&*self.store, &subject).await.unwrap();
        subject.id
    }

    /// Rewrite a session's expiry to an absolute instant.
    pub async fn set_session_expiry(&self, cookie_pair: &str, expires_at: DateTime<Utc>) {
        let token = cookie_pair
            .split_once('=')
            .map(|(_, v)| v)
            .expect("cookie pair has no value");
        assert!(self.store.set_session_expiry(token, expires_at).await);
    }
}

/// Asserts the full cache-suppression header set is present.
pub fn assert_cache_suppressed(response: &TestResponse) {
    assert_eq!(
        response
            .headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate, private")
    );
    assert_eq!(
        response
            .headers
            .get(header::PRAGMA)
            .and_then(|v| v.to_str().ok()),
        Some("no-cache")
    );
    assert_eq!(
        response
            .headers
            .get(header::EXPIRES)
            .and_then(|v| v.to_str().ok()),
        Some("0")
    );
    assert_eq!(
        response
            .headers
            .get(header::X_FRAME_OPTIONS)
            .and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
}
