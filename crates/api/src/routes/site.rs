//! Route definitions for site-wide resources: categories, settings, themes
//! and the contact form.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{categories, contact, settings, themes};
use crate::state::AppState;

/// Public routes merged at the API root.
///
/// ```text
/// GET  /categories             -> list_categories
/// GET  /categories/{category}  -> get_category
/// GET  /settings               -> get_settings
/// GET  /themes                 -> list_themes
/// GET  /themes/{name}          -> get_theme
/// POST /contact                -> send_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories/{category}", get(categories::get_category))
        .route("/settings", get(settings::get_settings))
        .route("/themes", get(themes::list_themes))
        .route("/themes/{name}", get(themes::get_theme))
        .route("/contact", post(contact::send_message))
}

/// Admin routes merged at the API root.
///
/// ```text
/// GET  /admin/settings       -> admin_get_settings
/// PUT  /admin/settings       -> update_settings
/// POST /admin/themes/next    -> cycle_theme
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/settings",
            get(settings::admin_get_settings).put(settings::update_settings),
        )
        .route("/admin/themes/next", post(themes::cycle_theme))
}
