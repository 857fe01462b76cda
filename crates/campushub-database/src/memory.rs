//! In-memory store backend.
//!
//! Backs the `memory` database backend for single-node trials and for
//! integration tests that should not depend on a running PostgreSQL.
//! A single [`MemoryStore`] implements every store trait over one
//! mutex-guarded state block, so cross-entity operations like cascade
//! deletes stay consistent.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use campushub_core::AppResult;
use campushub_core::error::AppError;
use campushub_entity::identity::Identity;
use campushub_entity::profile::StudentProfile;
use campushub_entity::record::{AttendanceRecord, ExamResult};
use campushub_entity::session::Session;
use campushub_entity::subject::{EnrolledSubject, Enrollment, Subject};

use crate::store::{
    AttendanceStore, IdentityStore, ProfileStore, ResultStore, SessionStore, SubjectStore,
};

#[derive(Debug, Default)]
struct State {
    identities: HashMap<Uuid, Identity>,
    profiles: HashMap<Uuid, StudentProfile>,
    sessions: HashMap<String, Session>,
    subjects: HashMap<Uuid, Subject>,
    enrollments: Vec<Enrollment>,
    results: Vec<ExamResult>,
    attendance: Vec<AttendanceRecord>,
}

/// In-memory implementation of all store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite a session's expiry to an absolute instant.
    ///
    /// Only exists so tests can age a session without sleeping.
    pub async fn set_session_expiry(&self, token: &str, expires_at: DateTime<Utc>) -> bool {
        let mut state = self.state.lock().await;
        match state.sessions.get_mut(token) {
            Some(session) => {
                session.expires_at = expires_at;
                true
            }
            None => false,
        }
    }

    /// Number of live session entries, expired or not.
    pub async fn session_count(&self) -> usize {
        self.state.lock().await.sessions.len()
    }

    /// Look up a session entry by token, expired or not.
    ///
    /// Only exists so tests can inspect session state directly.
    pub async fn find_session(&self, token: &str) -> Option<Session> {
        self.state.lock().await.sessions.get(token).cloned()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn create(&self, identity: &Identity) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let taken = state
            .identities
            .values()
            .any(|i| i.username.eq_ignore_ascii_case(&identity.username));
        if taken {
            return Err(AppError::conflict("Username already exists."));
        }
        state.identities.insert(identity.id, identity.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(self.state.lock().await.identities.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Identity>> {
        let state = self.state.lock().await;
        Ok(state
            .identities
            .values()
            .find(|i| i.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn delete_cascade(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        if state.identities.remove(&id).is_none() {
            return Ok(false);
        }
        state.sessions.retain(|_, s| s.identity_id != id);
        let profile_ids: Vec<Uuid> = state
            .profiles
            .values()
            .filter(|p| p.identity_id == id)
            .map(|p| p.id)
            .collect();
        state.profiles.retain(|_, p| p.identity_id != id);
        state
            .enrollments
            .retain(|e| !profile_ids.contains(&e.student_id));
        state
            .results
            .retain(|r| !profile_ids.contains(&r.student_id));
        state
            .attendance
            .retain(|a| !profile_ids.contains(&a.student_id));
        Ok(true)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create(&self, session: &Session) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.sessions.insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn touch(
        &self,
        token: &str,
        now: DateTime<Utc>,
        idle_lifetime: Duration,
    ) -> AppResult<Option<Session>> {
        let mut state = self.state.lock().await;
        // Check and refresh under one lock, matching the single
        // conditional UPDATE of the PostgreSQL backend.
        match state.sessions.get_mut(token) {
            Some(session) if !session.is_expired(now) => {
                session.last_seen_at = now;
                session.expires_at = now + idle_lifetime;
                Ok(Some(session.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> AppResult<bool> {
        Ok(self.state.lock().await.sessions.remove(token).is_some())
    }

    async fn delete_by_identity(&self, identity_id: Uuid) -> AppResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| s.identity_id != identity_id);
        Ok((before - state.sessions.len()) as u64)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| !s.is_expired(now));
        Ok((before - state.sessions.len()) as u64)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create(&self, profile: &StudentProfile) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let taken = state
            .profiles
            .values()
            .any(|p| p.roll_number == profile.roll_number);
        if taken {
            return Err(AppError::conflict("Roll number already exists!"));
        }
        state.profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StudentProfile>> {
        Ok(self.state.lock().await.profiles.get(&id).cloned())
    }

    async fn find_by_identity(&self, identity_id: Uuid) -> AppResult<Option<StudentProfile>> {
        let state = self.state.lock().await;
        Ok(state
            .profiles
            .values()
            .find(|p| p.identity_id == identity_id)
            .cloned())
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<StudentProfile>> {
        let state = self.state.lock().await;
        Ok(state
            .profiles
            .values()
            .find(|p| p.roll_number == roll_number)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<StudentProfile>> {
        let state = self.state.lock().await;
        let mut profiles: Vec<StudentProfile> = state.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));
        Ok(profiles)
    }

    async fn update(&self, profile: &StudentProfile) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if let Some(existing) = state.profiles.get_mut(&profile.id) {
            *existing = profile.clone();
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.state.lock().await.profiles.len() as i64)
    }

    async fn count_by_completion(&self, completed: bool) -> AppResult<i64> {
        let state = self.state.lock().await;
        Ok(state
            .profiles
            .values()
            .filter(|p| p.profile_completed == completed)
            .count() as i64)
    }
}

#[async_trait]
impl SubjectStore for MemoryStore {
    async fn create(&self, subject: &Subject) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.subjects.values().any(|s| s.code == subject.code) {
            return Err(AppError::conflict("Subject code already exists."));
        }
        state.subjects.insert(subject.id, subject.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>> {
        Ok(self.state.lock().await.subjects.get(&id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Subject>> {
        let state = self.state.lock().await;
        Ok(state.subjects.values().find(|s| s.code == code).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Subject>> {
        let state = self.state.lock().await;
        let mut subjects: Vec<Subject> = state.subjects.values().cloned().collect();
        subjects.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(subjects)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.state.lock().await.subjects.len() as i64)
    }

    async fn enroll(&self, student_id: Uuid, subject_id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let exists = state
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.subject_id == subject_id);
        if !exists {
            state.enrollments.push(Enrollment {
                student_id,
                subject_id,
                enrolled_on: Utc::now().date_naive(),
            });
        }
        Ok(())
    }

    async fn subjects_for_student(&self, student_id: Uuid) -> AppResult<Vec<EnrolledSubject>> {
        let state = self.state.lock().await;
        let mut enrolled: Vec<EnrolledSubject> = state
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| {
                state.subjects.get(&e.subject_id).map(|s| EnrolledSubject {
                    subject: s.clone(),
                    enrolled_on: e.enrolled_on,
                })
            })
            .collect();
        enrolled.sort_by(|a, b| a.subject.code.cmp(&b.subject.code));
        Ok(enrolled)
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn create(&self, result: &ExamResult) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let duplicate = state.results.iter().any(|r| {
            r.student_id == result.student_id
                && r.subject_id == result.subject_id
                && r.exam_type == result.exam_type
        });
        if duplicate {
            return Err(AppError::conflict(
                "A result for this subject and exam type already exists.",
            ));
        }
        state.results.push(result.clone());
        Ok(())
    }

    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<ExamResult>> {
        let state = self.state.lock().await;
        let mut results: Vec<ExamResult> = state
            .results
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.exam_date.cmp(&a.exam_date));
        Ok(results)
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn create(&self, record: &AttendanceRecord) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let duplicate = state.attendance.iter().any(|a| {
            a.student_id == record.student_id
                && a.subject_id == record.subject_id
                && a.month == record.month
                && a.year == record.year
        });
        if duplicate {
            return Err(AppError::conflict(
                "Attendance for this subject and month is already recorded.",
            ));
        }
        state.attendance.push(record.clone());
        Ok(())
    }

    async fn list_for_student(&self, student_id: Uuid) -> AppResult<Vec<AttendanceRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_entity::identity::Role;

    fn identity(username: &str) -> Identity {
        Identity::new(
            username,
            Some(format!("{username}@example.edu")),
            "Test",
            "User",
            "hash",
            Role::Student,
        )
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        IdentityStore::create(&store, &identity("alice")).await.unwrap();

        let err = IdentityStore::create(&store, &identity("ALICE"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Username already exists.");
    }

    #[tokio::test]
    async fn test_touch_refuses_expired_session() {
        let store = MemoryStore::new();
        let session = Session::new("tok", Uuid::new_v4(), Duration::seconds(3600));
        SessionStore::create(&store, &session).await.unwrap();

        let now = Utc::now();
        let refreshed = store
            .touch("tok", now, Duration::seconds(3600))
            .await
            .unwrap()
            .unwrap();
        assert!(refreshed.expires_at > session.expires_at);

        store.set_session_expiry("tok", now - Duration::seconds(1)).await;
        assert!(store.touch("tok", now, Duration::seconds(3600)).await.unwrap().is_none());
        // The dead entry stays until purged or deleted.
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_cascade_delete_removes_children() {
        let store = MemoryStore::new();
        let owner = identity("bob");
        let owner_id = owner.id;
        IdentityStore::create(&store, &owner).await.unwrap();

        let profile = StudentProfile::new(owner_id, "R-100", None);
        let student_id = profile.id;
        ProfileStore::create(&store, &profile).await.unwrap();

        let subject = Subject::new("Mathematics", "MATH101", 4);
        SubjectStore::create(&store, &subject).await.unwrap();
        store.enroll(student_id, subject.id).await.unwrap();

        let session = Session::new("tok", owner_id, Duration::seconds(3600));
        SessionStore::create(&store, &session).await.unwrap();

        assert!(store.delete_cascade(owner_id).await.unwrap());
        assert!(ProfileStore::find_by_id(&store, student_id).await.unwrap().is_none());
        assert!(store.subjects_for_student(student_id).await.unwrap().is_empty());
        assert_eq!(store.session_count().await, 0);
        // Deleting again is a no-op.
        assert!(!store.delete_cascade(owner_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_enroll_is_idempotent() {
        let store = MemoryStore::new();
        let subject = Subject::new("Physics", "PHY101", 4);
        SubjectStore::create(&store, &subject).await.unwrap();

        let student_id = Uuid::new_v4();
        store.enroll(student_id, subject.id).await.unwrap();
        store.enroll(student_id, subject.id).await.unwrap();
        assert_eq!(store.subjects_for_student(student_id).await.unwrap().len(), 1);
    }
}
