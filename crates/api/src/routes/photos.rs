use axum::routing::get;
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// Routes mounted at `/photos`.
///
/// ```text
/// GET /         list_photos
/// GET /{id}     get_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photos::list_photos))
        .route("/{id}", get(photos::get_photo))
}
