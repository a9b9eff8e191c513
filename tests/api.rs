//! Router-level behavior tests
//!
//! These drive the fully assembled application without a live store:
//! liveness, session gating (401/403), the cookie lifecycle, boundary
//! validation, and the degraded mode where the store never came up.
//!
//! Routes that would reach PostgreSQL respond 503 here; for protected
//! routes that status doubles as proof that authentication and
//! authorization already passed.

use axum::http::StatusCode;
use axum_test::TestServer;
use cuisine_server::server::config::Config;
use cuisine_server::server::init::build_app;
use cuisine_server::server::state::AppState;
use serde_json::json;

fn test_config() -> Config {
    Config {
        port: 3000,
        database_url: None,
        jwt_secret: "integration-test-secret".to_string(),
        production: false,
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

fn server() -> TestServer {
    let app = build_app(AppState::new(None, test_config()));
    TestServer::new(app).expect("router should build")
}

#[tokio::test]
async fn liveness_route_returns_static_string() {
    let server = server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "My Muhammad Cuisine server is running here!");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let server = server();

    let response = server.get("/no-such-route").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_degrades_to_503_without_store() {
    let server = server();

    server
        .get("/allFoods")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server
        .get("/gallery")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server
        .get("/reviews")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn protected_route_without_cookie_is_401() {
    let server = server();

    let response = server.get("/addedFoods/alice@example.com").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_garbage_cookie_is_401() {
    let server = server();

    let response = server
        .get("/purchasedFoods/alice@example.com")
        .add_cookie(cookie::Cookie::new("token", "not.a.jwt"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn jwt_sets_httponly_session_cookie() {
    let server = server();

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "alice@example.com" }))
        .await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "success": true }));

    let cookie = response.cookie("token");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.max_age(), Some(time::Duration::days(60)));
}

#[tokio::test]
async fn session_cookie_authenticates_matching_email() {
    let server = server();

    let login = server
        .post("/jwt")
        .json(&json!({ "email": "alice@example.com" }))
        .await;
    let cookie = login.cookie("token");

    // Authentication and authorization pass; only the absent store fails.
    let response = server
        .get("/addedFoods/alice@example.com")
        .add_cookie(cookie)
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn session_cookie_for_other_email_is_403() {
    let server = server();

    let login = server
        .post("/jwt")
        .json(&json!({ "email": "mallory@example.com" }))
        .await;
    let cookie = login.cookie("token");

    let response = server
        .get("/addedFoods/alice@example.com")
        .add_cookie(cookie.clone())
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .get("/purchasedFoods/alice@example.com")
        .add_cookie(cookie)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let server = server();

    let response = server.get("/logOut").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "success": true }));

    let cookie = response.cookie("token");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
}

#[tokio::test]
async fn purchase_with_malformed_food_id_is_400() {
    let server = server();

    let response = server
        .post("/addPurchaseFood")
        .add_query_param("id", "not-a-uuid")
        .add_query_param("quantity", "2")
        .json(&json!({ "buyer_email": "bob@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn purchase_with_non_numeric_quantity_is_400() {
    let server = server();

    let response = server
        .post("/addPurchaseFood")
        .add_query_param("id", "3e0b6c2f-9f3c-4a77-8c2e-0b1f2d3c4e5f")
        .add_query_param("quantity", "lots")
        .json(&json!({ "buyer_email": "bob@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn purchase_with_non_positive_quantity_is_400() {
    let server = server();

    // Rejected by the boundary check before the store is ever consulted,
    // so this is 400 even while the store is down.
    let response = server
        .post("/addPurchaseFood")
        .add_query_param("id", "3e0b6c2f-9f3c-4a77-8c2e-0b1f2d3c4e5f")
        .add_query_param("quantity", "0")
        .json(&json!({ "buyer_email": "bob@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_purchase_with_malformed_id_is_400() {
    let server = server();

    let response = server.delete("/deletePurchasedFood/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn food_lookup_with_malformed_id_is_400() {
    let server = server();

    let response = server.get("/food/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
