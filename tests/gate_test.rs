//! Request gate tests: zone enforcement, forced invalidation, sliding
//! expiry, and cache suppression.

mod helpers;

use axum::http::header;
use chrono::{Duration, Utc};

use helpers::{TestApp, assert_cache_suppressed};

#[tokio::test]
async fn test_public_paths_need_no_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, 200);
    // Public responses stay cacheable.
    assert!(response.headers.get(header::CACHE_CONTROL).is_none());

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_public_paths_stay_cacheable_with_session() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    // A signed-in visit to a public page is not stamped uncacheable.
    let response = app.request("GET", "/", None, Some(&cookie)).await;
    assert_eq!(response.status, 200);
    assert!(response.headers.get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn test_protected_paths_redirect_without_session() {
    let app = TestApp::new();

    for path in ["/student/dashboard/", "/admin-panel/", "/admin-panel/students/"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, 303, "path {path}");
        assert_eq!(response.location(), Some("/student/login/"));
    }
}

#[tokio::test]
async fn test_staff_in_student_zone_loses_session() {
    let app = TestApp::new();
    app.create_staff("admin", "admin-password", false).await;
    let cookie = app.login("admin", "admin-password").await;

    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));
    let flash = response.set_cookie("campushub_flash").unwrap();
    assert_eq!(flash, "campushub_flash=role-mismatch");

    // The session is gone; its cookie is now just a dead token.
    let response = app
        .request("GET", "/admin-panel/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));
    assert!(response.set_cookie("campushub_flash").is_none());

    // The notice surfaces on the login page.
    let login_page = app.request("GET", "/student/login/", None, Some(&flash)).await;
    assert_eq!(login_page.json()["notice"], "Access denied. Invalid session.");
}

#[tokio::test]
async fn test_student_in_staff_zone_loses_session() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    let response = app
        .request("GET", "/admin-panel/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));
    let flash = response.set_cookie("campushub_flash").unwrap();
    assert_eq!(flash, "campushub_flash=insufficient-privilege");

    let login_page = app.request("GET", "/student/login/", None, Some(&flash)).await;
    assert_eq!(
        login_page.json()["notice"],
        "Access denied. Insufficient permissions."
    );

    // The dashboard no longer accepts the dead cookie either.
    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
}

#[tokio::test]
async fn test_protected_responses_are_cache_suppressed() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 200);
    assert_cache_suppressed(&response);
}

#[tokio::test]
async fn test_idle_expired_session_redirects() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    app.set_session_expiry(&cookie, Utc::now() - Duration::seconds(1))
        .await;

    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));

    // A fresh login works immediately afterwards.
    let cookie = app.login("alice", "long-enough-pw").await;
    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_activity_slides_the_expiry_window() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;
    let token = cookie.split_once('=').unwrap().1.to_string();

    // Age the session to near its deadline, then make a request.
    let near_deadline = Utc::now() + Duration::seconds(10);
    app.set_session_expiry(&cookie, near_deadline).await;

    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 200);

    let session = app.store.find_session(&token).await.unwrap();
    assert!(session.expires_at > near_deadline);
}
