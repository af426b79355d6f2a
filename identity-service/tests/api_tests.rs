mod common;

use common::TestApp;
use identity_service::domain::identity::models::Handle;
use identity_service::domain::identity::ports::UserDirectory;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_token_pair() {
    let app = TestApp::spawn().await;

    let data = app.register("ann@example.com", "Ann", "pw1").await;

    assert!(data["access_token"].is_string());
    assert!(data["refresh_token"].is_string());
    assert_eq!(data["token_type"], "bearer");
    assert_ne!(data["access_token"], data["refresh_token"]);
}

#[tokio::test]
async fn test_register_duplicate_handle_conflicts() {
    let app = TestApp::spawn().await;

    app.register("ann@example.com", "Ann", "pw1").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "ann@example.com",
            "name": "Another Ann",
            "password": "pw2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already registered"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "name": "Ann",
            "password": "pw1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_then_access_protected_route() {
    let app = TestApp::spawn().await;
    app.register("ann@example.com", "Ann", "pw1").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({"email": "ann@example.com", "password": "pw1"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let access_token = body["data"]["access_token"].as_str().unwrap();

    let me = app
        .get("/api/auth/me")
        .bearer_auth(access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(me.status(), StatusCode::OK);

    let me_body: serde_json::Value = me.json().await.expect("Failed to parse response");
    assert_eq!(me_body["data"]["email"], "ann@example.com");
    assert_eq!(me_body["data"]["name"], "Ann");
    assert!(me_body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_tampered_token_is_rejected_generically() {
    let app = TestApp::spawn().await;
    let data = app.register("ann@example.com", "Ann", "pw1").await;
    let access_token = data["access_token"].as_str().unwrap();

    let response = app
        .get("/api/auth/me")
        .bearer_auth(format!("{}x", access_token))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The body never says why the token failed
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Could not validate credentials");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_handle_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("ann@example.com", "Ann", "pw1").await;

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({"email": "ann@example.com", "password": "nope"}))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_handle = app
        .post("/api/auth/login")
        .json(&json!({"email": "ghost@example.com", "password": "pw1"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_handle.status(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_handle.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_refresh_mints_working_pair() {
    let app = TestApp::spawn().await;
    let data = app.register("ann@example.com", "Ann", "pw1").await;
    let refresh_token = data["refresh_token"].as_str().unwrap();

    let response = app
        .post("/api/auth/refresh")
        .json(&json!({"refresh_token": refresh_token}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let new_access = body["data"]["access_token"].as_str().unwrap();

    let me = app
        .get("/api/auth/me")
        .bearer_auth(new_access)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_access_token_rejected_by_refresh_endpoint() {
    let app = TestApp::spawn().await;
    let data = app.register("ann@example.com", "Ann", "pw1").await;
    let access_token = data["access_token"].as_str().unwrap();

    let response = app
        .post("/api/auth/refresh")
        .json(&json!({"refresh_token": access_token}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_refresh_token_rejected_by_protected_route() {
    let app = TestApp::spawn().await;
    let data = app.register("ann@example.com", "Ann", "pw1").await;
    let refresh_token = data["refresh_token"].as_str().unwrap();

    let response = app
        .get("/api/auth/me")
        .bearer_auth(refresh_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_identity_invalidates_session() {
    let app = TestApp::spawn().await;
    let data = app.register("ann@example.com", "Ann", "pw1").await;
    let access_token = data["access_token"].as_str().unwrap();

    // Identity removed after issuance; the still-unexpired token must stop
    // working
    let handle = Handle::new("ann@example.com".to_string()).unwrap();
    assert!(app.directory.delete_by_handle(&handle).await.unwrap());

    let response = app
        .get("/api/auth/me")
        .bearer_auth(access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_access_token_rejected() {
    let app = TestApp::spawn().await;
    app.register("ann@example.com", "Ann", "pw1").await;

    let stale = app.expired_access_token("ann@example.com");

    let response = app
        .get("/api/auth/me")
        .bearer_auth(stale)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
