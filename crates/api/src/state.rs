use std::sync::Arc;

use photoview_browser::PhotoBrowser;
use photoview_gateway::PhotoGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Photo API gateway shared by every request.
    pub gateway: Arc<dyn PhotoGateway>,
}

impl AppState {
    /// A fresh browser for one request, so per-request limits never leak
    /// between concurrent handlers.
    pub fn browser(&self) -> PhotoBrowser {
        PhotoBrowser::new(Arc::clone(&self.gateway))
    }
}
