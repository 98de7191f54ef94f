//! Route definitions for soft skills and their categories.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{skill_categories, soft_skills};
use crate::state::AppState;

/// Public routes mounted at `/soft-skills`.
pub fn soft_skills_router() -> Router<AppState> {
    Router::new()
        .route("/", get(soft_skills::list_soft_skills))
        .route("/{id}", get(soft_skills::get_soft_skill))
}

/// Admin routes mounted at `/admin/soft-skills`.
///
/// ```text
/// GET    /            -> admin_list_soft_skills
/// POST   /            -> create_soft_skill
/// PATCH  /reorder     -> reorder_soft_skills
/// GET    /{id}        -> admin_get_soft_skill
/// PUT    /{id}        -> update_soft_skill
/// DELETE /{id}        -> delete_soft_skill
/// PATCH  /{id}/move   -> move_soft_skill
/// ```
pub fn soft_skills_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(soft_skills::admin_list_soft_skills).post(soft_skills::create_soft_skill),
        )
        .route("/reorder", patch(soft_skills::reorder_soft_skills))
        .route(
            "/{id}",
            get(soft_skills::admin_get_soft_skill)
                .put(soft_skills::update_soft_skill)
                .delete(soft_skills::delete_soft_skill),
        )
        .route("/{id}/move", patch(soft_skills::move_soft_skill))
}

/// Public routes mounted at `/skill-categories`.
///
/// ```text
/// GET /              -> list_skill_categories
/// GET /with-skills   -> list_with_skills
/// GET /{id}          -> get_skill_category
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill_categories::list_skill_categories))
        .route("/with-skills", get(skill_categories::list_with_skills))
        .route("/{id}", get(skill_categories::get_skill_category))
}

/// Admin routes mounted at `/admin/skill-categories`.
pub fn categories_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(skill_categories::admin_list_skill_categories)
                .post(skill_categories::create_skill_category),
        )
        .route(
            "/reorder",
            patch(skill_categories::reorder_skill_categories),
        )
        .route(
            "/{id}",
            get(skill_categories::admin_get_skill_category)
                .put(skill_categories::update_skill_category)
                .delete(skill_categories::delete_skill_category),
        )
        .route("/{id}/move", patch(skill_categories::move_skill_category))
}
