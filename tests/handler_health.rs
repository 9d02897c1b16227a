mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tracking_number_service::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["generator"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("generator").is_some());
}
