/// Photo identifiers as issued by the photo API (always >= 1 once validated).
pub type PhotoId = i64;

/// Album identifiers. Albums are only a grouping key, never a stored entity.
pub type AlbumId = i64;

/// An untyped JSON record exactly as the photo API returned it.
pub type RawRecord = serde_json::Value;
