//! API Integration Tests
//!
//! Memory-backed tests run everywhere. PostgreSQL-backed tests require
//! `DATABASE_URL` and are skipped without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use futures::future::join_all;
use integration_tests::{
    assert_json, assert_status, check_test_env, fetch_used, fixtures::*, insert_code, test_pool,
    TestServer, TEST_JWT_SECRET,
};
use invite_common::JwtService;
use reqwest::{Method, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start_memory(&[]).await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start_memory(&[]).await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.store, "healthy");
}

// ============================================================================
// Verify Tests (memory store)
// ============================================================================

#[tokio::test]
async fn test_verify_issues_token_once() {
    let server = TestServer::start_memory(&["ABC123"]).await.unwrap();

    let response = server.post("/verify", &VerifyRequest::new("ABC123")).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Verification successful.");

    let token = body.token.expect("token should be issued");
    let claims = JwtService::new(TEST_JWT_SECRET, 1).decode_token(&token).unwrap();
    assert_eq!(claims.code, "ABC123");
    assert_eq!(claims.lifetime(), 30 * 24 * 60 * 60);

    let response = server.post("/verify", &VerifyRequest::new("ABC123")).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.code.as_deref(), Some("ALREADY_USED"));
    assert!(body.token.is_none());
}

#[tokio::test]
async fn test_verify_unknown_code() {
    let server = TestServer::start_memory(&["ABC123"]).await.unwrap();

    let response = server.post("/verify", &VerifyRequest::new("XYZ999")).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.message, "Invalid invitation code.");
}

#[tokio::test]
async fn test_verify_missing_code() {
    let server = TestServer::start_memory(&["ABC123"]).await.unwrap();

    for payload in ["{}", r#"{"invitationCode":""}"#, "garbage"] {
        let response = server.post_raw("/verify", payload).await.unwrap();
        let body: VerifyResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(!body.success);
        assert_eq!(body.code.as_deref(), Some("MISSING_INPUT"));
    }
}

#[tokio::test]
async fn test_verify_method_dispatch() {
    let server = TestServer::start_memory(&[]).await.unwrap();

    let response = server.request(Method::OPTIONS, "/verify").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().is_empty());

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server.request(method, "/verify").await.unwrap();
        let body: MethodNotAllowedBody =
            assert_json(response, StatusCode::METHOD_NOT_ALLOWED).await.unwrap();
        assert_eq!(body.message, "Method Not Allowed");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_verify_single_winner() {
    let server = Arc::new(TestServer::start_memory(&["RACE01"]).await.unwrap());

    let attempts = (0..10).map(|_| {
        let server = Arc::clone(&server);
        tokio::spawn(async move {
            let response = server.post("/verify", &VerifyRequest::new("RACE01")).await?;
            assert_json::<VerifyResponse>(response, StatusCode::OK).await
        })
    });

    let bodies: Vec<VerifyResponse> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(bodies.iter().filter(|b| b.success).count(), 1);
    assert!(bodies
        .iter()
        .filter(|b| !b.success)
        .all(|b| b.code.as_deref() == Some("ALREADY_USED")));
}

// ============================================================================
// Verify Tests (PostgreSQL store)
// ============================================================================

#[tokio::test]
async fn test_postgres_verify_marks_row() {
    if !check_test_env().await {
        return;
    }

    let pool = test_pool().await.expect("Failed to prepare database");
    let code = unique_code("e2e");
    insert_code(&pool, &code, None).await.unwrap();

    let server = TestServer::start_postgres("point").await.unwrap();

    let response = server.post("/verify", &VerifyRequest::new(&code)).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(fetch_used(&pool, &code).await.unwrap(), Some(true));

    let response = server.post("/verify", &VerifyRequest::new(&code)).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.code.as_deref(), Some("ALREADY_USED"));
}

#[tokio::test]
async fn test_postgres_range_lookup() {
    if !check_test_env().await {
        return;
    }

    let pool = test_pool().await.expect("Failed to prepare database");
    let code = unique_code("range");
    insert_code(&pool, &code, Some(false)).await.unwrap();
    insert_code(&pool, &format!("{code}-longer"), Some(false)).await.unwrap();

    let server = TestServer::start_postgres("range").await.unwrap();

    let response = server.post("/verify", &VerifyRequest::new(&code)).await.unwrap();
    let body: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(
        fetch_used(&pool, &format!("{code}-longer")).await.unwrap(),
        Some(false)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_postgres_concurrent_single_winner() {
    if !check_test_env().await {
        return;
    }

    let pool = test_pool().await.expect("Failed to prepare database");
    let code = unique_code("race");
    insert_code(&pool, &code, Some(false)).await.unwrap();

    let server = Arc::new(TestServer::start_postgres("point").await.unwrap());

    let attempts = (0..8).map(|_| {
        let server = Arc::clone(&server);
        let code = code.clone();
        tokio::spawn(async move {
            let response = server.post("/verify", &VerifyRequest::new(code)).await?;
            assert_json::<VerifyResponse>(response, StatusCode::OK).await
        })
    });

    let winners = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .filter(|body| body.success)
        .count();

    assert_eq!(winners, 1);
}
