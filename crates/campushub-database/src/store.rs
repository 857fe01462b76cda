//! Store traits for all CampusHub entities.
//!
//! Each trait is a narrow contract over the durable store. Two backends
//! implement them: [`crate::postgres`] for deployments and
//! [`crate::memory::MemoryStore`] for single-node trials and tests.
//! Services and handlers only ever see `Arc<dyn ...Store>`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_entity::identity::Identity;
use campushub_entity::profile::StudentProfile;
use campushub_entity::record::{AttendanceRecord, ExamResult};
use campushub_entity::session::Session;
use campushub_entity::subject::{EnrolledSubject, Subject};

/// Identity CRUD operations.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Persist a new identity. Fails with `Conflict` on a duplicate username.
    async fn create(&self, identity: &Identity) -> AppResult<()>;

    /// Find an identity by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>>;

    /// Find an identity by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Identity>>;

    /// Delete an identity and everything hanging off it: profile,
    /// enrollments, results, attendance, and live sessions.
    /// Returns `true` if an identity was deleted.
    async fn delete_cascade(&self, id: Uuid) -> AppResult<bool>;
}

/// Session CRUD with atomic sliding-expiry refresh.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Persist a new session.
    async fn create(&self, session: &Session) -> AppResult<()>;

    /// Slide the expiry window forward and return the refreshed session,
    /// if and only if the session exists and had not expired at `now`.
    ///
    /// The check and the refresh are a single conditional write so a
    /// concurrent request can never resurrect an expired session.
    async fn touch(
        &self,
        token: &str,
        now: DateTime<Utc>,
        idle_lifetime: Duration,
    ) -> AppResult<Option<Session>>;

    /// Delete a session. Returns `true` if a session was deleted.
    async fn delete(&self, token: &str) -> AppResult<bool>;

    /// Delete every session belonging to an identity. Returns the count.
    async fn delete_by_identity(&self, identity_id: Uuid) -> AppResult<u64>;

    /// Remove sessions whose expiry has passed. Returns the count.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

/// Student profile CRUD operations.
#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// Persist a new profile. Fails with `Conflict` on a duplicate roll number.
    async fn create(&self, profile: &StudentProfile) -> AppResult<()>;

    /// Find a profile by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StudentProfile>>;

    /// Find the profile linked to an identity, if any.
    async fn find_by_identity(&self, identity_id: Uuid) -> AppResult<Option<StudentProfile>>;

    /// Find a profile by roll number.
    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<StudentProfile>>;

    /// List all profiles ordered by roll number.
    async fn list(&self) -> AppResult<Vec<StudentProfile>>;

    /// Overwrite an existing profile.
    async fn update(&self, profile: &StudentProfile) -> AppResult<()>;

    /// Count all profiles.
    async fn count(&self) -> AppResult<i64>;

    /// Count profiles by completion state.
    async fn count_by_completion(&self, completed: bool) -> AppResult<i64>;
}

/// Subject catalog and enrollment operations.
#[async_trait]
pub trait SubjectStore: Send + Sync + 'static {
    /// Persist a new subject. Fails with `Conflict` on a duplicate code.
    async fn create(&self, subject: &Subject) -> AppResult<()>;

    /// Find a subject by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>>;

    /// Find a subject by code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Subject>>;

    /// List all subjects ordered by code.
    async fn list(&self) -> AppResult<Vec<Subject>>;

    /// Count all subjects.
    async fn count(&self) -> AppResult<i64>;

    /// Enroll a student in a subject. Idempotent per (student, subject).
    async fn enroll(&self, student_id: Uuid, subject_id: Uuid) -> AppResult<()>;

    /// List the subjects a student is enrolled in, with enrollment dates.
    async fn subjects_for_student(&self, student_id: Uuid) -> AppResult<Vec<EnrolledSubject>>;
}

/// Exam result operations.
#[async_trait]
pub trait ResultStore: Send + Sync + 'static {
    /// Persist a new exam result. Fails with `Conflict` on a duplicate
    /// (student, subject, exam type).
    async fn create(&self, result: &ExamResult) -> AppResult<()>;

    /// List all results for a student.
    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<ExamResult>>;
}

/// Attendance record operations.
#[async_trait]
pub trait AttendanceStore: Send + Sync + 'static {
    /// Persist a new attendance record. Fails with `Conflict` on a duplicate
    /// (student, subject, month, year).
    async fn create(&self, record: &AttendanceRecord) -> AppResult<()>;

    /// List all attendance records for a student.
    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<AttendanceRecord>>;
}

/// Bundle of store handles threaded through services and app state.
#[derive(Clone)]
pub struct Stores {
    /// Identity store.
    pub identities: Arc<dyn IdentityStore>,
    /// Session store.
    pub sessions: Arc<dyn SessionStore>,
    /// Student profile store.
    pub profiles: Arc<dyn ProfileStore>,
    /// Subject and enrollment store.
    pub subjects: Arc<dyn SubjectStore>,
    /// Exam result store.
    pub results: Arc<dyn ResultStore>,
    /// Attendance store.
    pub attendance: Arc<dyn AttendanceStore>,
}

impl Stores {
    /// Build the PostgreSQL-backed store bundle.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            identities: Arc::new(crate::postgres::identity::PgIdentityStore::new(pool.clone())),
            sessions: Arc::new(crate::postgres::session::PgSessionStore::new(pool.clone())),
            profiles: Arc::new(crate::postgres::profile::PgProfileStore::new(pool.clone())),
            subjects: Arc::new(crate::postgres::subject::PgSubjectStore::new(pool.clone())),
            results: Arc::new(crate::postgres::result::PgResultStore::new(pool.clone())),
            attendance: Arc::new(crate::postgres::attendance::PgAttendanceStore::new(pool)),
        }
    }

    /// Build a store bundle over a shared in-memory store.
    pub fn memory(store: Arc<crate::memory::MemoryStore>) -> Self {
        Self {
            identities: Arc::clone(&store) as Arc<dyn IdentityStore>,
            sessions: Arc::clone(&store) as Arc<dyn SessionStore>,
            profiles: Arc::clone(&store) as Arc<dyn ProfileStore>,
            subjects: Arc::clone(&store) as Arc<dyn SubjectStore>,
            results: Arc::clone(&store) as Arc<dyn ResultStore>,
            attendance: store as Arc<dyn AttendanceStore>,
        }
    }
}
