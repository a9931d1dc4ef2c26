mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use paytrack_backend::domain::models::user::Role;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

async fn post_login(app: &TestApp, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_login_returns_token_with_stored_role() {
    let app = TestApp::new().await;
    app.seed_user("u1", "p1", Role::Admin).await;

    let response = post_login(&app, json!({"username": "u1", "password": "p1"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], "u1");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    // The embedded role must match the stored role.
    let token = body["token"].as_str().unwrap();
    let claims = app.state.auth_service.verify_token(token).unwrap();
    assert_eq!(claims.username, "u1");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.seed_user("u1", "p1", Role::Viewer).await;

    let wrong_password = post_login(&app, json!({"username": "u1", "password": "wrong"})).await;
    let unknown_user = post_login(&app, json!({"username": "ghost", "password": "whatever"})).await;

    // 401 in both cases, never a 404 for the unknown username.
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password_body = parse_body(wrong_password).await;
    let unknown_user_body = parse_body(unknown_user).await;
    assert_eq!(wrong_password_body, unknown_user_body);
    assert_eq!(wrong_password_body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_with_correct_password_of_other_user_fails() {
    let app = TestApp::new().await;
    app.seed_user("u1", "p1", Role::Admin).await;
    app.seed_user("u2", "p2", Role::Intern).await;

    let response = post_login(&app, json!({"username": "u1", "password": "p2"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields_rejected() {
    let app = TestApp::new().await;
    app.seed_user("u1", "p1", Role::Admin).await;

    let missing_password = post_login(&app, json!({"username": "u1"})).await;
    assert_eq!(missing_password.status(), StatusCode::BAD_REQUEST);

    let missing_username = post_login(&app, json!({"password": "p1"})).await;
    assert_eq!(missing_username.status(), StatusCode::BAD_REQUEST);

    let empty_password = post_login(&app, json!({"username": "u1", "password": ""})).await;
    assert_eq!(empty_password.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_token_is_accepted_by_protected_route() {
    let app = TestApp::new().await;
    app.seed_user("u1", "p1", Role::Admin).await;

    let token = app.login("u1", "p1").await;

    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "username": "u2",
                "password": "p2",
                "role": "viewer"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
