//! Photo API gateways.
//!
//! [`PhotoGateway`] is the boundary between the photo pipeline and the
//! remote REST API. [`api::ApiGateway`] talks to the real service over HTTP
//! using [`reqwest`]; [`fake::FakeGateway`] serves generated or pre-loaded
//! records from memory for tests.
//!
//! Gateways return raw, unvalidated JSON records. Validation belongs to
//! `photoview_core::photo`.

pub mod api;
pub mod error;
pub mod fake;

use async_trait::async_trait;
use photoview_core::types::{AlbumId, PhotoId, RawRecord};

pub use error::GatewayError;

/// Query parameter carrying the page size (JSONPlaceholder convention).
pub const LIMIT_PARAM: &str = "_limit";

/// Source of raw photo records.
#[async_trait]
pub trait PhotoGateway: Send + Sync {
    /// Fetch up to `limit` photos.
    async fn fetch_photos(&self, limit: u32) -> Result<Vec<RawRecord>, GatewayError>;

    /// Fetch a single photo by ID.
    async fn fetch_photo(&self, id: PhotoId) -> Result<RawRecord, GatewayError>;

    /// Fetch up to `limit` photos belonging to one album.
    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        limit: u32,
    ) -> Result<Vec<RawRecord>, GatewayError>;
}
