mod helpers;

use axum::http::StatusCode;
use helpers::{request, test_app};

#[tokio::test]
async fn health_is_public_and_ok() {
    let (app, _store) = test_app();
    let (status, body) = request(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_reports_ready_with_a_reachable_store() {
    let (app, _store) = test_app();
    let (status, body) = request(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn user_routes_require_the_gateway_identity() {
    let (app, _store) = test_app();
    let (status, _body) = request(&app, "GET", "/recipes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
