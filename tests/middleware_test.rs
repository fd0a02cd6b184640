//! Integration tests for the bearer token gate.
//!
//! These run without a database. The pool targets a port nothing
//! listens on, so any request that would reach a repository fails with
//! a database error even when a live PostgreSQL is available; an
//! observed 401 therefore proves the request was rejected before
//! handler logic ran.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};

use kinoteka_auth::jwt::claims::Claims;

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app.request("GET", "/api/actors", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION");
}

#[tokio::test]
async fn test_wrong_scheme_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request_with_header("GET", "/api/actors", "Token abc.def.ghi")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lowercase_scheme_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request_with_header("GET", "/api/actors", "bearer abc.def.ghi")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_single_segment_header_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app.request_with_header("GET", "/api/actors", "Bearer").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_three_segment_header_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request_with_header("GET", "/api/actors", "Bearer abc def")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request_with_header("GET", "/api/actors", "Bearer not.a.token")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let now = Utc::now().timestamp();
    let claims = Claims {
        user_id: 1,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = sign(&claims, &app.config.auth.jwt_secret);

    let response = app
        .request_with_header("GET", "/api/actors", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_foreign_secret_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let now = Utc::now().timestamp();
    let claims = Claims {
        user_id: 1,
        iat: now,
        exp: now + 3600,
    };
    let token = sign(&claims, "some-other-secret");

    let response = app
        .request_with_header("GET", "/api/actors", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token signature");
}

#[tokio::test]
async fn test_valid_token_passes_the_gate() {
    let app = helpers::TestApp::lazy();
    let token = app.issue_token(1);

    let response = app.request("GET", "/api/actors", None, Some(&token)).await;

    // With no database behind the lazy pool the handler itself fails,
    // which is exactly the point: the request got past the token gate.
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "DATABASE");
    assert_eq!(response.body["message"], "Internal server error");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::lazy();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["database"], "down");
}

#[tokio::test]
async fn test_sign_up_validation_runs_before_the_store() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/auth/sign-up",
            Some(serde_json::json!({
                "username": "al",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_sign_in_empty_password_is_rejected() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/auth/sign-in",
            Some(serde_json::json!({
                "username": "alice",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_sort_order_is_rejected() {
    let app = helpers::TestApp::lazy();
    let token = app.issue_token(1);

    let response = app
        .request(
            "GET",
            "/api/movies?sort=alphabetical",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid sort order")
    );
}

#[tokio::test]
async fn test_search_requires_exactly_one_criterion() {
    let app = helpers::TestApp::lazy();
    let token = app.issue_token(1);

    let both = app
        .request(
            "GET",
            "/api/movies/search?title=heat&actor=pacino",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(both.status, StatusCode::BAD_REQUEST);

    let neither = app
        .request("GET", "/api/movies/search", None, Some(&token))
        .await;
    assert_eq!(neither.status, StatusCode::BAD_REQUEST);
}
