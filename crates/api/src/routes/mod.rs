pub mod auth;
pub mod health;
pub mod media;
pub mod posts;
pub mod profile;
pub mod site;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                                   published posts (?category=&hashtag=)
/// /posts/hashtags                          distinct hashtags
/// /posts/paged                             paged published posts
/// /posts/{slug}                            single published post
/// /categories, /categories/{category}      category labels + counts
/// /settings                                site settings
/// /themes, /themes/{name}                  colour presets
/// /contact                                 contact form (POST)
/// /media/{id}                              media metadata
/// /media/{subdir}/{filename}               stored file
/// /soft-skills, /soft-skills/{id}
/// /skill-categories, /skill-categories/with-skills, /skill-categories/{id}
/// /experiences, /experiences/{id}
/// /interests, /interests/{id}
/// /achievements, /achievements/{id}
/// /rpg-stats, /rpg-stats/{id}
///
/// /admin/auth/me                           current admin (GET)
/// /admin/auth/logout                       clear session (POST)
/// /admin/settings                          get, update
/// /admin/themes/next                       switch to next preset (POST)
/// /admin/posts                             list, create
/// /admin/posts/{id}                        get, update, delete
/// /admin/posts/{id}/publish                toggle published (PATCH)
/// /admin/media                             paged list, upload
/// /admin/media/unassigned                  paged list without a post
/// /admin/media/youtube                     YouTube embed (POST)
/// /admin/media/{id}                        update, delete
/// /admin/{entity}                          list, create
/// /admin/{entity}/{id}                     get, update, delete
/// /admin/{entity}/reorder                  bulk display order (PATCH)
/// /admin/{entity}/{id}/move                server-side move (PATCH)
/// ```
///
/// `{entity}` is any of `posts`, `media`, `soft-skills`, `skill-categories`,
/// `experiences`, `interests`, `achievements`, `rpg-stats` for the ordering
/// routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public content.
        .merge(site::router())
        .nest("/posts", posts::router())
        .nest("/media", media::router())
        .nest("/soft-skills", skills::soft_skills_router())
        .nest("/skill-categories", skills::categories_router())
        .nest("/experiences", profile::experiences_router())
        .nest("/interests", profile::interests_router())
        .nest("/achievements", profile::achievements_router())
        .nest("/rpg-stats", profile::rpg_stats_router())
        // Admin panel (every handler takes `RequireAdmin`).
        .merge(site::admin_router())
        .nest("/admin/auth", auth::router())
        .nest("/admin/posts", posts::admin_router())
        .nest("/admin/media", media::admin_router())
        .nest("/admin/soft-skills", skills::soft_skills_admin_router())
        .nest("/admin/skill-categories", skills::categories_admin_router())
        .nest("/admin/experiences", profile::experiences_admin_router())
        .nest("/admin/interests", profile::interests_admin_router())
        .nest("/admin/achievements", profile::achievements_admin_router())
        .nest("/admin/rpg-stats", profile::rpg_stats_admin_router())
}
