use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use photoview_browser::BrowserError;
use photoview_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`BrowserError`] for pipeline failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the photo browsing pipeline.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Browser(BrowserError::Core(core)) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MalformedData(_) => {
                    tracing::error!(error = %self, "Photo API returned malformed data");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MALFORMED_DATA",
                        "Received malformed data from the photo API".to_string(),
                    )
                }
            },

            AppError::Browser(BrowserError::Upstream { context, source }) => {
                if source.is_not_found() {
                    tracing::info!(error = %source, "{context}");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", context.clone())
                } else {
                    tracing::error!(error = %source, "{context}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        context.clone(),
                    )
                }
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
