use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use quiz_submission_backend::config::Config;
use quiz_submission_backend::database::connection::ConnectionManager;
use quiz_submission_backend::routes;
use quiz_submission_backend::services::validator::{Profile, ScoreField};
use quiz_submission_backend::AppState;

fn test_config(admin_token: Option<&str>) -> Config {
    Config {
        database_url: None,
        port: 5000,
        environment: "test".to_string(),
        profile: Profile::B,
        score_field: ScoreField::Score,
        db_retry_delay_secs: 1,
        db_connect_timeout_secs: 1,
        allowed_origins: vec![],
        admin_token: admin_token.map(|t| t.to_string()),
    }
}

/// Router backed by a manager that has never connected; every store-touching
/// route must answer 503 without reaching the database.
fn disconnected_app(admin_token: Option<&str>) -> axum::Router {
    let manager = ConnectionManager::new(Duration::from_secs(1), Duration::from_secs(1));
    let state = AppState::new(manager, &test_config(admin_token));
    routes::router(state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_database_state_and_environment() {
    let resp = disconnected_app(None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["database"], "Disconnected");
    assert_eq!(body["environment"], "test");
    assert!(body["timestamp"].is_string());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_reports_status_and_port() {
    let resp = disconnected_app(None)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "Disconnected");
    assert_eq!(body["port"], 5000);
}

#[tokio::test]
async fn submit_while_disconnected_is_503() {
    let payload = json!({"name": "Ana", "phone": "555", "language": "en"});
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = disconnected_app(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn list_while_disconnected_is_503() {
    let req = Request::builder()
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let resp = disconnected_app(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(resp).await["success"], false);
}

#[tokio::test]
async fn admin_list_without_configured_token_is_unauthorized() {
    let req = Request::builder()
        .uri("/api/admin/users")
        .body(Body::empty())
        .unwrap();
    let resp = disconnected_app(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_list_with_wrong_token_is_unauthorized() {
    let req = Request::builder()
        .uri("/api/admin/users")
        .header("authorization", "Bearer wrong")
        .body(Body::empty())
        .unwrap();
    let resp = disconnected_app(Some("secret")).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["success"], false);
}

#[tokio::test]
async fn admin_list_with_valid_token_reaches_the_handler() {
    // Auth passes, then the readiness check answers 503 (no database here).
    let req = Request::builder()
        .uri("/api/admin/users")
        .header("authorization", "Bearer secret")
        .body(Body::empty())
        .unwrap();
    let resp = disconnected_app(Some("secret")).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_route_echoes_the_path() {
    let req = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();
    let resp = disconnected_app(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
    assert_eq!(body["path"], "/api/nope");
}
