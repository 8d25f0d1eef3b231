//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional page size (`?limit=`). Validated by the photo browser, so
/// zero and negative values surface as 400 responses.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
