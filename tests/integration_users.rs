#![allow(clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub)]
use reqwest::StatusCode;
use serde_json::{Value, json};

mod common;

#[tokio::test]
async fn test_register_returns_public_user() {
    let app = common::TestApp::spawn().await;

    let user = app.register_user("a@x.com", "pw1").await;

    assert_eq!(user["email"], "a@x.com");
    assert!(uuid::Uuid::parse_str(user["id"].as_str().unwrap()).is_ok());
    assert!(user["created_at"].is_string());
    assert!(user["updated_at"].is_string());
    assert!(user.get("password").is_none());
    assert!(user.get("hashed_password").is_none());
    assert_eq!(user.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = common::TestApp::spawn().await;
    let first = app.register_user("dup@x.com", "pw1").await;

    let resp = app
        .client
        .post(app.url("/api/users"))
        .json(&json!({ "email": "dup@x.com", "password": "pw2" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Email already registered");

    // The first password still works and resolves to the first account.
    let login = app.login("dup@x.com", "pw1").await;
    assert_eq!(login.status(), StatusCode::OK);
    let user: Value = login.json().await.unwrap();
    assert_eq!(user["id"], first["id"]);
}

#[tokio::test]
async fn test_login_flow() {
    let app = common::TestApp::spawn().await;
    let registered = app.register_user("login@x.com", "password12345").await;

    let resp = app.login("login@x.com", "password12345").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["id"], registered["id"]);
    assert_eq!(user["email"], "login@x.com");
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = common::TestApp::spawn().await;
    app.register_user("a@x.com", "pw1").await;

    let wrong_password = app.login("a@x.com", "wrong").await;
    let unknown_email = app.login("nobody@x.com", "pw1").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a: Value = wrong_password.json().await.unwrap();
    let b: Value = unknown_email.json().await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a["error"], "Incorrect email or password");
}

#[tokio::test]
async fn test_malformed_registration_body() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/users"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Malformed request"));
}

#[tokio::test]
async fn test_registration_missing_password() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.post(app.url("/api/users")).json(&json!({ "email": "a@x.com" })).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn test_register_without_content_type() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/users"))
        .body(r#"{"email": "plain@x.com", "password": "pw1"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["email"], "plain@x.com");

    let resp = app
        .client
        .post(app.url("/api/login"))
        .header("Content-Type", "text/plain")
        .body(r#"{"email": "plain@x.com", "password": "pw1"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
