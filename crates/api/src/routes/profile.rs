//! Route definitions for the profile sections: experiences, interests,
//! achievements and RPG stats.
//!
//! Every section has the same shape:
//!
//! ```text
//! public  GET /, /{id}
//! admin   GET|POST /, PATCH /reorder, GET|PUT|DELETE /{id}, PATCH /{id}/move
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{achievements, experiences, interests, rpg_stats};
use crate::state::AppState;

pub fn experiences_router() -> Router<AppState> {
    Router::new()
        .route("/", get(experiences::list_experiences))
        .route("/{id}", get(experiences::get_experience))
}

pub fn experiences_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(experiences::admin_list_experiences).post(experiences::create_experience),
        )
        .route("/reorder", patch(experiences::reorder_experiences))
        .route(
            "/{id}",
            get(experiences::admin_get_experience)
                .put(experiences::update_experience)
                .delete(experiences::delete_experience),
        )
        .route("/{id}/move", patch(experiences::move_experience))
}

pub fn interests_router() -> Router<AppState> {
    Router::new()
        .route("/", get(interests::list_interests))
        .route("/{id}", get(interests::get_interest))
}

pub fn interests_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(interests::admin_list_interests).post(interests::create_interest),
        )
        .route("/reorder", patch(interests::reorder_interests))
        .route(
            "/{id}",
            get(interests::admin_get_interest)
                .put(interests::update_interest)
                .delete(interests::delete_interest),
        )
        .route("/{id}/move", patch(interests::move_interest))
}

pub fn achievements_router() -> Router<AppState> {
    Router::new()
        .route("/", get(achievements::list_achievements))
        .route("/{id}", get(achievements::get_achievement))
}

pub fn achievements_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(achievements::admin_list_achievements).post(achievements::create_achievement),
        )
        .route("/reorder", patch(achievements::reorder_achievements))
        .route(
            "/{id}",
            get(achievements::admin_get_achievement)
                .put(achievements::update_achievement)
                .delete(achievements::delete_achievement),
        )
        .route("/{id}/move", patch(achievements::move_achievement))
}

pub fn rpg_stats_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rpg_stats::list_rpg_stats))
        .route("/{id}", get(rpg_stats::get_rpg_stat))
}

pub fn rpg_stats_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(rpg_stats::admin_list_rpg_stats).post(rpg_stats::create_rpg_stat),
        )
        .route("/reorder", patch(rpg_stats::reorder_rpg_stats))
        .route(
            "/{id}",
            get(rpg_stats::admin_get_rpg_stat)
                .put(rpg_stats::update_rpg_stat)
                .delete(rpg_stats::delete_rpg_stat),
        )
        .route("/{id}/move", patch(rpg_stats::move_rpg_stat))
}
