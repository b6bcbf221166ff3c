//! Integration tests for registration, login and the current-user lookup

mod common;

use axum::http::StatusCode;
use common::{unique_email, TestApp, TEST_PASSWORD};
use serde_json::json;
use storefront_backend::repositories::UserRepository;
use storefront_shared::Role;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_created_without_data() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/auth/register",
            &json!({
                "full_name": "Jane Doe",
                "email": unique_email(),
                "password": TEST_PASSWORD,
            }),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful");
    assert!(body.get("data").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, body) = app
        .post(
            "/auth/register",
            &json!({
                "full_name": "Someone Else",
                "email": user.email,
                "password": "another-password",
            }),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_short_password_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/auth/register",
            &json!({
                "full_name": "Jane Doe",
                "email": unique_email(),
                "password": "short",
            }),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_token_carries_identity() {
    let app = TestApp::new().await;
    let email = unique_email();
    let (status, _) = app
        .post(
            "/auth/register",
            &json!({ "full_name": "Jane Doe", "email": email, "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post(
            "/auth/login",
            &json!({ "email": email, "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let stored = UserRepository::find_by_email(&app.pool, &email)
        .await
        .unwrap()
        .unwrap();
    let claims = app.jwt.verify(body["data"]["token"].as_str().unwrap()).unwrap();

    assert_eq!(claims.user_id, stored.id);
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    let user = app.create_test_user().await;

    let (wrong_status, wrong_body) = app
        .post(
            "/auth/login",
            &json!({ "email": user.email, "password": "not-the-password" }),
            None,
        )
        .await;
    let (unknown_status, unknown_body) = app
        .post(
            "/auth/login",
            &json!({ "email": unique_email(), "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_profile_without_hash() {
    let app = TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, body) = app.get("/auth/me", Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id.to_string());
    assert_eq!(body["data"]["email"], user.email);
    assert_eq!(body["data"]["role"], "user");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_promoted_admin_token_carries_admin_role() {
    let app = TestApp::new().await;
    let admin = app.create_admin().await;

    let claims = app.jwt.verify(&admin.token).unwrap();

    assert_eq!(claims.role, Role::Admin);
}
