#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use photoview_gateway::fake::FakeGateway;
use serde_json::{json, Value};
use tower::ServiceExt;

use photoview_api::config::ServerConfig;
use photoview_api::router::build_app_router;
use photoview_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        photo_api_url: "http://photos.invalid".to_string(),
        upstream_timeout_secs: 10,
    }
}

/// Build the full application router, backed by `gateway`.
pub fn build_test_app(gateway: Arc<FakeGateway>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        gateway,
    };
    build_app_router(state, &config)
}

/// Issue a `GET` request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid raw photo record.
pub fn payload(id: i64, album_id: i64) -> Value {
    json!({
        "id": id,
        "albumId": album_id,
        "title": format!("Photo {id}"),
        "url": "https://via.placeholder.com/600/92c952",
        "thumbnailUrl": "https://via.placeholder.com/150/92c952",
    })
}
