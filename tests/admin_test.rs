//! Integration tests for the admin gate.
//!
//! These tests share one database; run them with `--test-threads=1`.

mod helpers;

use http::StatusCode;

fn actor_body() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Robert",
        "last_name": "De Niro",
        "gender": "male",
        "date_of_birth": "1943-08-17",
    })
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_non_admin_mutation_is_forbidden_without_side_effect() {
    let app = helpers::TestApp::new().await;

    let signed_up = app
        .request(
            "POST",
            "/auth/sign-up",
            Some(serde_json::json!({
                "username": "alice",
                "password": "secretsecret",
            })),
            None,
        )
        .await;
    assert_eq!(signed_up.status, StatusCode::OK);

    let token = app.sign_in("alice", "secretsecret").await;

    let response = app
        .request("POST", "/api/actors", Some(actor_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "AUTHORIZATION");
    assert_eq!(app.count("actors").await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_promotion_applies_to_an_existing_token() {
    let app = helpers::TestApp::new().await;

    let signed_up = app
        .request(
            "POST",
            "/auth/sign-up",
            Some(serde_json::json!({
                "username": "alice",
                "password": "secretsecret",
            })),
            None,
        )
        .await;
    let alice_id = signed_up.body["data"]["id"].as_i64().unwrap();

    let token = app.sign_in("alice", "secretsecret").await;

    let forbidden = app
        .request("POST", "/api/actors", Some(actor_body()), Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    // Promote directly in the store. The privilege is looked up per
    // request, so the very same token must now be accepted.
    app.set_admin(alice_id, true).await;

    let allowed = app
        .request("POST", "/api/actors", Some(actor_body()), Some(&token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert_eq!(app.count("actors").await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_demotion_applies_to_an_existing_token() {
    let app = helpers::TestApp::new().await;
    let admin_id = app.create_test_user("boss", "password123", true).await;
    let token = app.sign_in("boss", "password123").await;

    let allowed = app
        .request("POST", "/api/actors", Some(actor_body()), Some(&token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    app.set_admin(admin_id, false).await;

    let forbidden = app
        .request(
            "DELETE",
            &format!(
                "/api/actors/{}",
                allowed.body["data"]["id"].as_i64().unwrap()
            ),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("actors").await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_deleted_account_fails_the_gate_as_unauthorized() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("ghost", "password123", true).await;
    let token = app.sign_in("ghost", "password123").await;

    app.delete_user(user_id).await;

    // The token still verifies, but the gate's store lookup finds no
    // account behind it.
    let response = app
        .request("POST", "/api/actors", Some(actor_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reads_require_no_admin_flag() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("reader", "password123", false).await;
    let token = app.sign_in("reader", "password123").await;

    let actors = app.request("GET", "/api/actors", None, Some(&token)).await;
    assert_eq!(actors.status, StatusCode::OK);

    let movies = app.request("GET", "/api/movies", None, Some(&token)).await;
    assert_eq!(movies.status, StatusCode::OK);
}
