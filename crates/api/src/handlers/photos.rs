//! Handlers for photo listing and photo detail.

use axum::extract::{Path, Query, State};
use axum::Json;
use photoview_core::dimensions::Dimensions;
use photoview_core::photo::Photo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A photo together with the sizes derived from its URLs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDetail {
    pub photo: Photo,
    pub full_size: Dimensions,
    pub thumbnail_size: Dimensions,
}

/// GET /api/v1/photos?limit=N
///
/// Flat list of photos; `limit` defaults to the browser's default page size.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<Photo>>>> {
    let mut browser = state.browser();
    if let Some(limit) = params.limit {
        browser.with_limit(limit)?;
    }

    let photos = browser.load_photos().await?;
    Ok(Json(DataResponse { data: photos }))
}

/// GET /api/v1/photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<PhotoDetail>>> {
    let id = parse_id(&raw_id, "photo")?;
    let photo = state.browser().load_photo(id).await?;

    let detail = PhotoDetail {
        full_size: photo.full_size(),
        thumbnail_size: photo.thumbnail_size(),
        photo,
    };
    Ok(Json(DataResponse { data: detail }))
}
