//! API Integration Tests
//!
//! Each test spins the real router on a loopback port, backed by the
//! in-memory user directory, and drives it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, fixtures::*, session_set_cookie, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reports_storage_outage() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.repo.set_offline(true);
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["checks"]["database"], "unhealthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_alice_end_to_end() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = RegisterRequest::alice();

    // Register
    let response = server.post("/api/v1/users/register", &alice).await.unwrap();
    let registered: Envelope<UserProfile> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        registered.message.as_deref(),
        Some("user registered successfully")
    );
    assert_eq!(
        registered.data,
        UserProfile {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
            role: "user".to_string(),
        }
    );

    // Login sets the session cookie and returns the same token
    let response = server
        .post("/api/v1/users/login", &LoginRequest::from_register(&alice))
        .await
        .unwrap();
    let set_cookie = session_set_cookie(&response).expect("session cookie");
    let login: Envelope<LoginData> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.message.as_deref(), Some("login successful"));
    assert_eq!(login.data.user, registered.data);
    assert!(set_cookie.starts_with(&format!("auth_token={}", login.data.token)));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));

    // The token opens protected routes
    let response = server
        .get_auth("/api/v1/users/me", &login.data.token)
        .await
        .unwrap();
    let me: Envelope<UserProfile> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.data, registered.data);

    // Responses never carry the password or its hash
    let response = server
        .get_auth("/api/v1/users/1", &login.data.token)
        .await
        .unwrap();
    let raw = response.text().await.unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("argon2"));
}

#[tokio::test]
async fn test_register_with_role() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        role: Some("admin".to_string()),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    let body: Envelope<UserProfile> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.data.role, "admin");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.register(&request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "USER_ALREADY_EXISTS");
    assert_eq!(server.repo.len(), 1);
}

#[tokio::test]
async fn test_register_validation_details() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({
        "name": "",
        "email": "not-an-email",
        "password": "123",
        "age": 200
    });

    let response = server.post("/api/v1/users/register", &body).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    let details = body.error.details.expect("field details");
    for field in ["name", "email", "password", "age"] {
        assert!(details.get(field).is_some(), "missing detail for {field}");
    }
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .post(format!("{}/api/v1/users/register", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials_are_uniform() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.register(&request).await.unwrap();

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "wrongpass".to_string(),
    };
    let unknown_email = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: request.password.clone(),
    };

    let response = server.post("/api/v1/users/login", &wrong_password).await.unwrap();
    assert!(session_set_cookie(&response).is_none());
    let first: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post("/api/v1/users/login", &unknown_email).await.unwrap();
    let second: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(first.error.code, "INVALID_CREDENTIALS");
    assert_eq!(first.error.code, second.error.code);
    assert_eq!(first.error.message, second.error.message);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = server.register_and_login(&request).await.unwrap();

    let response = server
        .post_auth("/api/v1/users/logout", &token, &json!({}))
        .await
        .unwrap();
    let cleared = session_set_cookie(&response).expect("removal cookie");
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "logout successful");
    assert!(cleared.starts_with("auth_token=;"));
    assert!(cleared.contains("Max-Age=0"));

    // Logout without a session still succeeds and still clears
    let response = server.post("/api/v1/users/logout", &json!({})).await.unwrap();
    assert!(session_set_cookie(&response).is_some());
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_expired_session_rejected() {
    let config = test_config(&[("JWT_TOKEN_EXPIRY", "1")]).unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(2_500)).await;

    let response = server.get_auth("/api/v1/users/me", &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let other = TestServer::start_with_config(
        test_config(&[("JWT_SECRET", "some-other-secret")]).unwrap(),
    )
    .await
    .expect("Failed to start server");
    let request = RegisterRequest::unique();
    let foreign_token = other.register_and_login(&request).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    server.register(&request).await.unwrap();

    let response = server.get_auth("/api/v1/users/me", &foreign_token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_protected_routes_require_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/api/v1/users", "/api/v1/users/me", "/api/v1/users/1"] {
        let response = server.get(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(body.error.code, "MISSING_AUTH");
    }

    let response = server
        .get_auth("/api/v1/users", "definitely.not.a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = RegisterRequest::unique();
    let second = RegisterRequest::unique();
    server.register(&first).await.unwrap();
    let token = server.register_and_login(&second).await.unwrap();

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    let body: Envelope<Vec<UserProfile>> = assert_json(response, StatusCode::OK).await.unwrap();

    let emails: Vec<&str> = body.data.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec![first.email.as_str(), second.email.as_str()]);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::alice())
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/users/1", &token).await.unwrap();
    let body: Envelope<UserProfile> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.name, "Alice");

    let response = server.get_auth("/api/v1/users/999", &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_invalid_user_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    for path in ["/api/v1/users/abc", "/api/v1/users/0", "/api/v1/users/-4"] {
        let response = server.get_auth(path, &token).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.message, "Invalid path parameter: Invalid user ID");
    }
}

#[tokio::test]
async fn test_get_user_by_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = server.register_and_login(&request).await.unwrap();

    let response = server
        .post_auth("/api/v1/users/email", &token, &json!({ "email": request.email }))
        .await
        .unwrap();
    let body: Envelope<UserProfile> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.name, request.name);

    let response = server
        .post_auth(
            "/api/v1/users/email",
            &token,
            &json!({ "email": "nobody@example.com" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth("/api/v1/users/email", &token, &json!({ "email": "nope" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_user_partial() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = RegisterRequest::alice();
    let token = server.register_and_login(&alice).await.unwrap();

    let response = server
        .put_auth(
            "/api/v1/users/1",
            &token,
            &json!({ "name": "Alicia", "email": "", "age": 0 }),
        )
        .await
        .unwrap();
    let body: Envelope<UserProfile> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some("user updated successfully"));
    assert_eq!(body.data.name, "Alicia");
    assert_eq!(body.data.email, "a@x.com");
    assert_eq!(body.data.age, 30);
}

#[tokio::test]
async fn test_update_password_changes_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = RegisterRequest::alice();
    let token = server.register_and_login(&alice).await.unwrap();

    let response = server
        .put_auth("/api/v1/users/1", &token, &json!({ "password": "newpass1" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password is rejected
    let response = server
        .post("/api/v1/users/login", &LoginRequest::from_register(&alice))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password works
    let updated = RegisterRequest {
        password: "newpass1".to_string(),
        ..alice
    };
    server.login(&updated).await.unwrap();
}

#[tokio::test]
async fn test_update_user_errors() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = RegisterRequest::unique();
    let second = RegisterRequest::unique();
    server.register(&first).await.unwrap();
    let token = server.register_and_login(&second).await.unwrap();

    // Email already taken
    let response = server
        .put_auth("/api/v1/users/2", &token, &json!({ "email": first.email }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "USER_ALREADY_EXISTS");

    // Invalid field
    let response = server
        .put_auth("/api/v1/users/2", &token, &json!({ "age": 500 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Missing user
    let response = server
        .put_auth("/api/v1/users/77", &token, &json!({ "name": "Ghost" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::alice())
        .await
        .unwrap();
    let victim = RegisterRequest::unique();
    server.register(&victim).await.unwrap();

    let response = server.delete_auth("/api/v1/users/2", &token).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "user deleted successfully");

    let response = server.get_auth("/api/v1/users/2", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth("/api/v1/users/2", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_storage_outage_is_opaque() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    server.repo.set_offline(true);

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "DATABASE_ERROR");
    assert_eq!(body.error.message, "Database error");
}
