//! The validated [`Photo`] entity and its parser.
//!
//! [`create_photo`] is the only way to obtain a `Photo`: it either returns a
//! fully valid entity or a [`CoreError::MalformedData`] naming the first
//! field that failed validation.

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::dimensions::{derive_dimensions, Dimensions, DEFAULT_FULL_SIZE, DEFAULT_THUMBNAIL_SIZE};
use crate::error::CoreError;
use crate::types::{AlbumId, PhotoId, RawRecord};

// ---------------------------------------------------------------------------
// Record field names and messages
// ---------------------------------------------------------------------------

const FIELD_ID: &str = "id";
const FIELD_ALBUM_ID: &str = "albumId";
const FIELD_TITLE: &str = "title";
const FIELD_URL: &str = "url";
const FIELD_THUMBNAIL_URL: &str = "thumbnailUrl";

/// Every field a photo record is expected to carry.
pub const PHOTO_FIELDS: &[&str] = &[
    FIELD_ID,
    FIELD_ALBUM_ID,
    FIELD_TITLE,
    FIELD_URL,
    FIELD_THUMBNAIL_URL,
];

pub const MSG_INVALID_ID: &str = "Photo ID must be greater than zero";
pub const MSG_INVALID_ALBUM_ID: &str = "Album ID must be greater than zero";
pub const MSG_INVALID_TITLE: &str = "Title must be a non-empty string";
pub const MSG_INVALID_URL: &str = "Photo URL must be valid";
pub const MSG_INVALID_THUMBNAIL_URL: &str = "Thumbnail URL must be valid";

/// Detail used when a record does not resemble a photo at all.
pub const MSG_MALFORMED_RECORD: &str = "received malformed data";

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// A single image with identity, album membership, title and two URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    id: PhotoId,
    album_id: AlbumId,
    title: String,
    url: Url,
    thumbnail_url: Url,
}

impl Photo {
    /// Validate a raw API record. Same as [`create_photo`].
    pub fn from_record(record: &RawRecord) -> Result<Self, CoreError> {
        create_photo(record)
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn thumbnail_url(&self) -> &Url {
        &self.thumbnail_url
    }

    /// Size of the full image, `600x600` when the URL does not encode one.
    pub fn full_size(&self) -> Dimensions {
        derive_dimensions(&self.url, DEFAULT_FULL_SIZE)
    }

    /// Size of the thumbnail, `150x150` when the URL does not encode one.
    pub fn thumbnail_size(&self) -> Dimensions {
        derive_dimensions(&self.thumbnail_url, DEFAULT_THUMBNAIL_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Convert one raw record into a validated [`Photo`].
///
/// Fields are checked in the order `id`, `albumId`, `title`, `url`,
/// `thumbnailUrl` and the first violation is reported. A value that is not
/// an object, or an object with none of those fields, is reported as
/// generically malformed. Unknown fields are ignored.
pub fn create_photo(record: &RawRecord) -> Result<Photo, CoreError> {
    let fields = record
        .as_object()
        .filter(|map| PHOTO_FIELDS.iter().any(|field| map.contains_key(*field)))
        .ok_or_else(|| malformed(MSG_MALFORMED_RECORD))?;

    let id = positive_integer(fields, FIELD_ID).ok_or_else(|| malformed(MSG_INVALID_ID))?;
    let album_id =
        positive_integer(fields, FIELD_ALBUM_ID).ok_or_else(|| malformed(MSG_INVALID_ALBUM_ID))?;
    let title = non_empty_string(fields, FIELD_TITLE).ok_or_else(|| malformed(MSG_INVALID_TITLE))?;
    let url = absolute_url(fields, FIELD_URL).ok_or_else(|| malformed(MSG_INVALID_URL))?;
    let thumbnail_url = absolute_url(fields, FIELD_THUMBNAIL_URL)
        .ok_or_else(|| malformed(MSG_INVALID_THUMBNAIL_URL))?;

    Ok(Photo {
        id,
        album_id,
        title: title.to_string(),
        url,
        thumbnail_url,
    })
}

fn malformed(detail: &str) -> CoreError {
    CoreError::MalformedData(detail.to_string())
}

/// An integer >= 1. Integral floats such as `3.0` are accepted.
fn positive_integer(fields: &Map<String, Value>, name: &str) -> Option<i64> {
    let Value::Number(number) = fields.get(name)? else {
        return None;
    };

    let value = match number.as_i64() {
        Some(value) => value,
        None => {
            let float = number.as_f64()?;
            if float.fract() != 0.0 || float < 1.0 || float >= i64::MAX as f64 {
                return None;
            }
            float as i64
        }
    };

    (value >= 1).then_some(value)
}

fn non_empty_string<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields
        .get(name)?
        .as_str()
        .filter(|value| !value.is_empty())
}

fn absolute_url(fields: &Map<String, Value>, name: &str) -> Option<Url> {
    Url::parse(fields.get(name)?.as_str()?).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
