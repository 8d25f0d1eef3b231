use axum::routing::get;
use axum::Router;

use crate::handlers::albums;
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET /               list_albums
/// GET /{id}/photos    get_album_photos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(albums::list_albums))
        .route("/{id}/photos", get(albums::get_album_photos))
}
