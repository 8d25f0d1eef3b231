//! The [`PhotoBrowser`] orchestrator.

use std::sync::Arc;

use photoview_core::group::{group_by_album, Albums};
use photoview_core::photo::{create_photo, Photo, MSG_INVALID_ALBUM_ID, MSG_INVALID_ID};
use photoview_core::types::{AlbumId, PhotoId, RawRecord};
use photoview_gateway::PhotoGateway;

use crate::error::BrowserError;

/// Page size used until [`PhotoBrowser::with_limit`] is called.
pub const DEFAULT_LIMIT: u32 = 1000;

const MSG_INVALID_LIMIT: &str = "Photo limit must be greater than zero";

/// Loads validated photos through a [`PhotoGateway`].
///
/// Cloning is cheap: the gateway is shared and the limit is copied, so
/// concurrent callers can each hold their own browser with their own limit.
#[derive(Clone)]
pub struct PhotoBrowser {
    gateway: Arc<dyn PhotoGateway>,
    limit: u32,
}

impl PhotoBrowser {
    pub fn new(gateway: Arc<dyn PhotoGateway>) -> Self {
        Self {
            gateway,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the page size for subsequent loads. Returns the same browser so
    /// calls can be chained.
    pub fn with_limit(&mut self, limit: i64) -> Result<&mut Self, BrowserError> {
        if limit < 1 {
            return Err(BrowserError::validation(MSG_INVALID_LIMIT));
        }
        self.limit = u32::try_from(limit).map_err(|_| {
            BrowserError::validation(format!("Photo limit must not exceed {}", u32::MAX))
        })?;
        Ok(self)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Load up to `limit` photos. One malformed record fails the whole batch.
    pub async fn load_photos(&self) -> Result<Vec<Photo>, BrowserError> {
        let limit = self.limit;
        tracing::debug!(limit, "Loading photos");

        let records = self
            .gateway
            .fetch_photos(limit)
            .await
            .map_err(BrowserError::upstream("Could not load photos"))
            .inspect_err(log_failure)?;

        parse_all(records)
    }

    /// Load a single photo. IDs below 1 are rejected without a request.
    pub async fn load_photo(&self, id: PhotoId) -> Result<Photo, BrowserError> {
        if id < 1 {
            return Err(BrowserError::validation(MSG_INVALID_ID));
        }
        tracing::debug!(id, "Loading photo");

        let record = self
            .gateway
            .fetch_photo(id)
            .await
            .map_err(BrowserError::upstream(format!("Could not load photo with ID {id}")))
            .inspect_err(log_failure)?;

        parse_one(&record)
    }

    /// Load up to `limit` photos of one album. IDs below 1 are rejected
    /// without a request.
    pub async fn load_from_album(&self, album_id: AlbumId) -> Result<Vec<Photo>, BrowserError> {
        if album_id < 1 {
            return Err(BrowserError::validation(MSG_INVALID_ALBUM_ID));
        }
        let limit = self.limit;
        tracing::debug!(album_id, limit, "Loading album");

        let records = self
            .gateway
            .fetch_photos_by_album_id(album_id, limit)
            .await
            .map_err(BrowserError::upstream(format!(
                "Could not load album with ID {album_id}"
            )))
            .inspect_err(log_failure)?;

        parse_all(records)
    }

    /// [`load_photos`](Self::load_photos) grouped by album ID.
    pub async fn group_photos_by_album(&self) -> Result<Albums, BrowserError> {
        let photos = self.load_photos().await?;
        Ok(group_by_album(photos))
    }
}

impl std::fmt::Debug for PhotoBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoBrowser")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

fn parse_one(record: &RawRecord) -> Result<Photo, BrowserError> {
    create_photo(record)
        .map_err(BrowserError::from)
        .inspect_err(log_failure)
}

fn parse_all(records: Vec<RawRecord>) -> Result<Vec<Photo>, BrowserError> {
    records.iter().map(parse_one).collect()
}

fn log_failure(err: &BrowserError) {
    match err {
        BrowserError::Upstream { context, source } => {
            tracing::warn!(error = %source, "{context}");
        }
        BrowserError::Core(core) => {
            tracing::error!(error = %core, "Received an invalid photo record");
        }
    }
}
