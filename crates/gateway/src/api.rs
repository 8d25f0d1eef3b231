//! REST client for the remote photo API.
//!
//! Wraps the three read-only routes (`/photos`, `/photos/{id}`,
//! `/albums/{albumId}/photos`) using [`reqwest`].

use async_trait::async_trait;
use photoview_core::types::{AlbumId, PhotoId, RawRecord};
use url::Url;

use crate::error::GatewayError;
use crate::{PhotoGateway, LIMIT_PARAM};

/// HTTP gateway for a single photo API deployment.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    /// Create a gateway for the API rooted at `base_url`.
    ///
    /// * `base_url` - Absolute URL, e.g. `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a gateway reusing an existing [`reqwest::Client`]
    /// (useful for sharing a connection pool or setting timeouts).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url)
            .map_err(|_| GatewayError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- private helpers ----

    /// Issue a `GET` against `route`, optionally limited, and decode the JSON
    /// body into `T`.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        limit: Option<u32>,
    ) -> Result<T, GatewayError> {
        let mut request = self.client.get(format!("{}{}", self.base_url, route));
        if let Some(limit) = limit {
            request = request.query(&[(LIMIT_PARAM, limit)]);
        }

        tracing::debug!(route, ?limit, "Requesting photo API");

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(route, error = %e, "Photo API request failed");
        })?;

        let response = Self::ensure_success(route, response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`GatewayError::Status`] carrying the status and body text.
    async fn ensure_success(
        route: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(route, status = status.as_u16(), "Photo API returned an error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PhotoGateway for ApiGateway {
    async fn fetch_photos(&self, limit: u32) -> Result<Vec<RawRecord>, GatewayError> {
        self.get("/photos", Some(limit)).await
    }

    async fn fetch_photo(&self, id: PhotoId) -> Result<RawRecord, GatewayError> {
        self.get(&format!("/photos/{id}"), None).await
    }

    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        limit: u32,
    ) -> Result<Vec<RawRecord>, GatewayError> {
        self.get(&format!("/albums/{album_id}/photos"), Some(limit))
            .await
    }
}
