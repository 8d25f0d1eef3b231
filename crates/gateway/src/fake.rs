//! In-memory [`PhotoGateway`] for tests and offline development.
//!
//! Without configuration the fake generates deterministic records from a
//! seed. It can instead serve a fixed feed, or fail every call with a
//! configured error. It also counts calls so tests can assert that no
//! request was made.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use photoview_core::types::{AlbumId, PhotoId, RawRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::error::GatewayError;
use crate::PhotoGateway;

/// Seed used by [`FakeGateway::new`].
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Generated album IDs fall in `1..=MAX_FAKE_ALBUM_ID`.
const MAX_FAKE_ALBUM_ID: AlbumId = 100;

const TITLE_WORDS: &[&str] = &[
    "accusamus", "beatae", "culpa", "dolorem", "error", "fugiat", "harum", "illum", "natus",
    "officia", "quidem", "reprehenderit", "sint", "tempore", "ullam", "voluptas",
];

/// Failure a [`FakeGateway`] reproduces on every call.
#[derive(Debug, Clone)]
enum FakeFailure {
    Status { status: u16, body: String },
    Transport(String),
}

impl FakeFailure {
    fn to_error(&self) -> GatewayError {
        match self {
            FakeFailure::Status { status, body } => GatewayError::Status {
                status: *status,
                body: body.clone(),
            },
            FakeFailure::Transport(message) => GatewayError::Unavailable(message.clone()),
        }
    }
}

/// Test double fulfilling the [`PhotoGateway`] contract from memory.
#[derive(Debug)]
pub struct FakeGateway {
    seed: u64,
    feed: Option<Vec<RawRecord>>,
    failure: Option<FakeFailure>,
    calls: AtomicUsize,
    last_limit: Mutex<Option<u32>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED)
    }

    /// A fake whose generated records are derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            feed: None,
            failure: None,
            calls: AtomicUsize::new(0),
            last_limit: Mutex::new(None),
        }
    }

    /// Serve `records` verbatim from list fetches; single fetches return the
    /// first record.
    pub fn feed_with(mut self, records: Vec<RawRecord>) -> Self {
        self.feed = Some(records);
        self
    }

    /// Fail every call as if the API answered `status` with `body`.
    pub fn fail_with_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.failure = Some(FakeFailure::Status {
            status,
            body: body.into(),
        });
        self
    }

    /// Fail every call as if no response was received.
    pub fn fail_with_transport(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(FakeFailure::Transport(message.into()));
        self
    }

    /// Number of fetches issued against this gateway.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Limit passed to the most recent list fetch.
    pub fn last_limit(&self) -> Option<u32> {
        *self.last_limit.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ---- private helpers ----

    /// Count the call and surface the configured failure, if any.
    fn begin(&self, limit: Option<u32>) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if limit.is_some() {
            *self.last_limit.lock().unwrap_or_else(PoisonError::into_inner) = limit;
        }
        match &self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    /// Deterministic record for `id`; `album_id` pins the album when given.
    fn generate(&self, id: PhotoId, album_id: Option<AlbumId>) -> RawRecord {
        let mut rng = StdRng::seed_from_u64(self.seed ^ (id as u64).rotate_left(17));

        let album_id = album_id.unwrap_or_else(|| rng.random_range(1..=MAX_FAKE_ALBUM_ID));
        let title = (0..3)
            .map(|_| TITLE_WORDS[rng.random_range(0..TITLE_WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ");
        let colour: u32 = rng.random_range(0..=0xFF_FFFF);

        json!({
            "id": id,
            "albumId": album_id,
            "title": title,
            "url": format!("https://via.placeholder.com/600/{colour:06x}"),
            "thumbnailUrl": format!("https://via.placeholder.com/150/{colour:06x}"),
        })
    }

    fn generate_many(&self, limit: u32, album_id: Option<AlbumId>) -> Vec<RawRecord> {
        (1..=PhotoId::from(limit))
            .map(|id| self.generate(id, album_id))
            .collect()
    }
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoGateway for FakeGateway {
    async fn fetch_photos(&self, limit: u32) -> Result<Vec<RawRecord>, GatewayError> {
        self.begin(Some(limit))?;
        Ok(match &self.feed {
            Some(feed) => feed.clone(),
            None => self.generate_many(limit, None),
        })
    }

    async fn fetch_photo(&self, id: PhotoId) -> Result<RawRecord, GatewayError> {
        self.begin(None)?;
        match &self.feed {
            Some(feed) => feed.first().cloned().ok_or_else(|| GatewayError::Status {
                status: 404,
                body: format!("Photo not found with ID {id}"),
            }),
            None => Ok(self.generate(id, None)),
        }
    }

    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        limit: u32,
    ) -> Result<Vec<RawRecord>, GatewayError> {
        self.begin(Some(limit))?;
        Ok(match &self.feed {
            Some(feed) => feed.clone(),
            None => self.generate_many(limit, Some(album_id)),
        })
    }
}
