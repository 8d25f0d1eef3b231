pub mod albums;
pub mod photos;

use crate::error::{AppError, AppResult};

/// Parse a numeric path segment, answering 400 with `Invalid <entity> ID
/// '<raw>' given` when it is not an integer.
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {entity} ID '{raw}' given")))
}
