//! Registration flow tests.

mod helpers;

use helpers::TestApp;

#[tokio::test]
async fn test_registration_redirects_to_login_without_session() {
    let app = TestApp::new();

    let response = app.register_student("alice", "R-001").await;
    assert_eq!(response.status, 303);
    assert_eq!(response.location(), Some("/student/login/"));
    // Registration must never mint a session.
    assert!(response.set_cookie(&app.config.session.cookie_name).is_none());

    let flash = response.set_cookie("campushub_flash").unwrap();
    let login_page = app.request("GET", "/student/login/", None, Some(&flash)).await;
    assert_eq!(
        login_page.json()["notice"],
        "Registration successful! Please login."
    );
}

#[tokio::test]
async fn test_duplicate_roll_number_is_conflict() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;

    let response = app.register_student("bob", "R-001").await;
    assert_eq!(response.status, 409);
    assert_eq!(response.json()["message"], "Roll number already exists!");
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let app = TestApp::new();
    app.register_student("alice", "R-001").await;

    let response = app.register_student("alice", "R-002").await;
    assert_eq!(response.status, 409);
    assert_eq!(response.json()["message"], "Username already exists.");
}

#[tokio::test]
async fn test_password_rules_are_enforced() {
    let app = TestApp::new();

    let form = "username=carol&email=carol%40example.edu&first_name=Carol&last_name=C\
                &password=short&confirm_password=short&roll_number=R-003&phone=";
    let response = app
        .request("POST", "/student/register/", Some(form), None)
        .await;
    assert_eq!(response.status, 400);

    let form = "username=carol&email=carol%40example.edu&first_name=Carol&last_name=C\
                &password=long-enough-pw&confirm_password=different-pw&roll_number=R-003&phone=";
    let response = app
        .request("POST", "/student/register/", Some(form), None)
        .await;
    assert_eq!(response.status, 400);
}
