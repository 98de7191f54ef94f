//! Route definitions for the media library.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Public routes mounted at `/media`.
///
/// ```text
/// GET /{id}                 -> get_media
/// GET /{subdir}/{filename}  -> serve_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(media::get_media))
        .route("/{subdir}/{filename}", get(media::serve_file))
}

/// Admin routes mounted at `/admin/media`.
///
/// ```text
/// GET    /             -> admin_list_media
/// POST   /             -> upload_media (multipart)
/// GET    /unassigned   -> admin_list_unassigned
/// POST   /youtube      -> create_youtube
/// PATCH  /reorder      -> reorder_media
/// PUT    /{id}         -> update_media
/// DELETE /{id}         -> delete_media
/// PATCH  /{id}/move    -> move_media
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::admin_list_media).post(media::upload_media))
        .route("/unassigned", get(media::admin_list_unassigned))
        .route("/youtube", post(media::create_youtube))
        .route("/reorder", patch(media::reorder_media))
        .route(
            "/{id}",
            put(media::update_media).delete(media::delete_media),
        )
        .route("/{id}/move", patch(media::move_media))
}
