//! Route definitions for sessions and OAuth2 login.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Admin session routes mounted at `/admin/auth`.
///
/// ```text
/// GET  /me      -> me
/// POST /logout  -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
}

/// OAuth2 routes mounted at the root (not under `/api`).
///
/// ```text
/// GET /oauth2/authorization/{provider}  -> oauth_authorize
/// GET /login/oauth2/code/{provider}     -> oauth_callback
/// ```
pub fn oauth_router() -> Router<AppState> {
    Router::new()
        .route("/oauth2/authorization/{provider}", get(auth::oauth_authorize))
        .route("/login/oauth2/code/{provider}", get(auth::oauth_callback))
}
