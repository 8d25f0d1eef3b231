//! `photoview-api` -- JSON front end for the photo browsing pipeline.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                 | Description                     |
//! |-------------------------|----------|-------------------------|---------------------------------|
//! | `PHOTO_API_URL`         | yes      | --                      | Base URL of the photo REST API  |
//! | `HOST`                  | no       | `0.0.0.0`               | Bind address                    |
//! | `PORT`                  | no       | `3000`                  | Bind port                       |
//! | `CORS_ORIGINS`          | no       | `http://localhost:5173` | Comma-separated allowed origins |
//! | `REQUEST_TIMEOUT_SECS`  | no       | `30`                    | Inbound request timeout         |
//! | `UPSTREAM_TIMEOUT_SECS` | no       | `10`                    | Photo API request timeout       |

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use photoview_gateway::api::ApiGateway;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photoview_api::config::ServerConfig;
use photoview_api::router::build_app_router;
use photoview_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photoview_api=debug,photoview_browser=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        photo_api_url = %config.photo_api_url,
        "Loaded server configuration",
    );

    // --- Photo API gateway ---
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        });
    let gateway = ApiGateway::with_client(client, &config.photo_api_url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to create photo API gateway");
        std::process::exit(1);
    });

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        gateway: Arc::new(gateway),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
