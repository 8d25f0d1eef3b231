//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use photoview_api::error::AppError;
use photoview_browser::BrowserError;
use photoview_core::error::CoreError;
use photoview_gateway::GatewayError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn upstream(context: &str, source: GatewayError) -> AppError {
    AppError::Browser(BrowserError::Upstream {
        context: context.to_string(),
        source,
    })
}

#[tokio::test]
async fn validation_error_returns_400_verbatim() {
    let err = AppError::Browser(BrowserError::Core(CoreError::Validation(
        "Photo limit must be greater than zero".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Photo limit must be greater than zero");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) =
        error_to_response(AppError::BadRequest("Invalid photo ID 'x' given".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid photo ID 'x' given");
}

#[tokio::test]
async fn upstream_not_found_returns_404() {
    let err = upstream(
        "Could not load photo with ID 3",
        GatewayError::Status {
            status: 404,
            body: "{}".into(),
        },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Could not load photo with ID 3");
}

#[tokio::test]
async fn upstream_server_error_returns_500_without_upstream_body() {
    let err = upstream(
        "Could not load photos",
        GatewayError::Status {
            status: 502,
            body: "secret upstream stack trace".into(),
        },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Could not load photos");
}

#[tokio::test]
async fn upstream_transport_error_returns_500() {
    let err = upstream(
        "Could not load album with ID 1",
        GatewayError::Unavailable("connection refused".into()),
    );

    let (status, _) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn malformed_data_returns_500() {
    let err = AppError::Browser(BrowserError::Core(CoreError::MalformedData(
        "Photo URL must be valid".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "MALFORMED_DATA");
}
