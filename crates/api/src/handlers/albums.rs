//! Handlers for album listing and album pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use photoview_core::group::Albums;
use photoview_core::photo::Photo;
use photoview_core::types::AlbumId;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Photos loaded for the album overview when no `limit` is given.
pub const ALBUM_LISTING_LIMIT: i64 = 500;

/// Photos loaded for a single album page when no `limit` is given.
pub const ALBUM_PAGE_LIMIT: i64 = 50;

/// Photos of one album.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPage {
    pub album_id: AlbumId,
    pub photos: Vec<Photo>,
}

/// GET /api/v1/albums?limit=N
///
/// Photos grouped by album ID, albums in first-seen order.
pub async fn list_albums(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Albums>>> {
    let albums = state
        .browser()
        .with_limit(params.limit.unwrap_or(ALBUM_LISTING_LIMIT))?
        .group_photos_by_album()
        .await?;

    tracing::debug!(album_count = albums.len(), "Grouped photos into albums");
    Ok(Json(DataResponse { data: albums }))
}

/// GET /api/v1/albums/{id}/photos?limit=N
pub async fn get_album_photos(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<AlbumPage>>> {
    let album_id = parse_id(&raw_id, "album")?;
    let photos = state
        .browser()
        .with_limit(params.limit.unwrap_or(ALBUM_PAGE_LIMIT))?
        .load_from_album(album_id)
        .await?;

    Ok(Json(DataResponse {
        data: AlbumPage { album_id, photos },
    }))
}
