//! Route definitions for posts.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Public routes mounted at `/posts`.
///
/// ```text
/// GET /            -> list_posts
/// GET /hashtags    -> list_hashtags
/// GET /paged       -> list_posts_paged
/// GET /{slug}      -> get_post_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts))
        .route("/hashtags", get(posts::list_hashtags))
        .route("/paged", get(posts::list_posts_paged))
        .route("/{slug}", get(posts::get_post_by_slug))
}

/// Admin routes mounted at `/admin/posts`.
///
/// ```text
/// GET    /              -> admin_list_posts
/// POST   /              -> create_post
/// PATCH  /reorder       -> reorder_posts
/// GET    /{id}          -> admin_get_post
/// PUT    /{id}          -> update_post
/// DELETE /{id}          -> delete_post
/// PATCH  /{id}/publish  -> toggle_publish
/// PATCH  /{id}/move     -> move_post
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::admin_list_posts).post(posts::create_post))
        .route("/reorder", patch(posts::reorder_posts))
        .route(
            "/{id}",
            get(posts::admin_get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/{id}/publish", patch(posts::toggle_publish))
        .route("/{id}/move", patch(posts::move_post))
}
