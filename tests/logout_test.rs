//! Logout flow tests.

mod helpers;

use helpers::{TestApp, assert_cache_suppressed};

#[tokio::test]
async fn test_logout_destroys_session_and_suppresses_caching() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    let response = app
        .request("POST", "/student/logout/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/"));
    assert_cache_suppressed(&response);

    let flash = response.set_cookie("campushub_flash").unwrap();
    let login_page = app.request("GET", "/student/login/", None, Some(&flash)).await;
    assert_eq!(
        login_page.json()["notice"],
        "You have been logged out successfully."
    );

    // The old cookie no longer opens the dashboard.
    let response = app
        .request("GET", "/student/dashboard/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    let first = app
        .request("POST", "/student/logout/", None, Some(&cookie))
        .await;
    let second = app
        .request("POST", "/student/logout/", None, Some(&cookie))
        .await;
    let without_cookie = app.request("POST", "/student/logout/", None, None).await;

    for response in [&first, &second, &without_cookie] {
        assert_eq!(response.status, 303);
        assert_eq!(response.location(), Some("/"));
    }
}

#[tokio::test]
async fn test_ajax_logout_reports_session_state() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;
    let cookie = app.login("alice", "long-enough-pw").await;

    let response = app
        .request("POST", "/student/ajax-logout/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 200);
    assert_cache_suppressed(&response);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["redirect_url"], "/");

    // The session is already gone the second time.
    let response = app
        .request("POST", "/student/ajax-logout/", None, Some(&cookie))
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.json()["success"], false);
}
