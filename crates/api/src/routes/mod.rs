pub mod albums;
pub mod health;
pub mod photos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /photos                     flat photo list (?limit=)
/// /photos/{id}                single photo with derived sizes
/// /albums                     photos grouped by album (?limit=)
/// /albums/{id}/photos         photos of one album (?limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/photos", photos::router())
        .nest("/albums", albums::router())
}
