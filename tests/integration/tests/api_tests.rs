//! API Integration Tests
//!
//! Each test spawns the real server on an ephemeral port with its own
//! temporary credential store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_alice_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");

    let alice = RegisterRequest::new("alice", "a@x.com", "pw1");
    let response = server.post("/register", &alice).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(registered.msg, "User registered successfully");

    let impostor = RegisterRequest::new("alice", "other@x.com", "pw2");
    let response = server.post("/register", &impostor).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "DUPLICATE_USERNAME");
    assert_eq!(error.error.message, "Username already registered");

    let response = server
        .post_form("/token", &TokenForm::new("a@x.com", "pw1"))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_ne!(token.access_token, "alice");

    let response = server
        .post_form("/token", &TokenForm::new("a@x.com", "wrong"))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");

    let response = server
        .get_auth("/users/me", &token.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, "alice");
    assert_eq!(me.email, "a@x.com");
    assert!(me.full_name.is_none());
    assert!(me.disabled.is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let mut other = RegisterRequest::unique();
    other.email = request.email.clone();
    let response = server.post("/register", &other).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("bob", "not-an-email", "pw");

    let response = server.post("/register", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_email_matches_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let response = server
        .post_form("/token", &TokenForm::new("nobody@example.com", "x"))
        .await
        .unwrap();
    let unknown: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    let response = server
        .post_form("/token", &TokenForm::new(&request.email, "x"))
        .await
        .unwrap();
    let wrong: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(unknown.error.code, wrong.error.code);
    assert_eq!(unknown.error.message, wrong.error.message);
}

#[tokio::test]
async fn test_full_name_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.full_name = Some("Test User".to_string());
    server.post("/register", &request).await.unwrap();

    let response = server
        .post_form("/token", &TokenForm::from_register(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/users/me", &token.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.full_name.as_deref(), Some("Test User"));
}

// ============================================================================
// Current User Tests
// ============================================================================

#[tokio::test]
async fn test_me_never_exposes_hash() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let response = server
        .post_form("/token", &TokenForm::from_register(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/users/me", &token.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let text = body.to_string();
    assert!(!text.contains("hashed_password"));
    assert!(!text.contains("$argon2"));
}

#[tokio::test]
async fn test_me_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/me").await.unwrap();

    assert_eq!(
        response.headers().get("www-authenticate").unwrap(),
        "Bearer"
    );
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_me_with_username_as_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let response = server
        .get_auth("/users/me", &request.username)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");
    assert_eq!(error.error.message, "Invalid token");
}

#[tokio::test]
async fn test_expired_session() {
    let server = TestServer::start_with_env(&[("SESSION_TTL_SECONDS", "1")])
        .await
        .expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let response = server
        .post_form("/token", &TokenForm::from_register(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = server
        .get_auth("/users/me", &token.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_store_file_format() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::new("carol", "c@x.com", "pw");
    server.post("/register", &request).await.unwrap();

    let contents = std::fs::read_to_string(server.users_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let carol = &json["carol"];

    assert_eq!(carol["username"], "carol");
    assert_eq!(carol["email"], "c@x.com");
    assert!(carol["full_name"].is_null());
    assert!(carol["disabled"].is_null());
    assert!(carol["hashed_password"]
        .as_str()
        .unwrap()
        .starts_with("$argon2"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_persist() {
    let server = std::sync::Arc::new(TestServer::start().await.expect("Failed to start server"));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let server = std::sync::Arc::clone(&server);
            tokio::spawn(async move {
                let request = RegisterRequest::unique();
                let response = server.post("/register", &request).await.unwrap();
                assert_status(response, StatusCode::OK).await.unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let contents = std::fs::read_to_string(server.users_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 10);
}
