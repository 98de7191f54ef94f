//! Session endpoints and the OAuth2 login flow.

use axum::extract::{Path, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderName};
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::user::UpsertUser;
use folio_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::cookie::{self, AUTH_COOKIE, OAUTH_STATE_COOKIE, OAUTH_STATE_MAX_AGE_SECS};
use crate::auth::jwt::generate_token;
use crate::auth::oauth::{self, Provider, ProviderCredentials};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Resolve the `{provider}` segment. Providers without credentials are
/// reported as missing.
fn enabled_provider<'a>(
    state: &'a AppState,
    raw: &str,
) -> AppResult<(Provider, &'a ProviderCredentials)> {
    Provider::parse(raw)
        .and_then(|p| state.config.oauth.credentials(p).map(|c| (p, c)))
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBy {
                entity: "OAuth2 provider",
                key: raw.to_string(),
            })
        })
}

/// Redirect that also sets the given cookies.
fn redirect_with(
    cookies: Vec<String>,
    location: &str,
) -> (AppendHeaders<Vec<(HeaderName, String)>>, Redirect) {
    let headers = cookies.into_iter().map(|c| (SET_COOKIE, c)).collect();
    (AppendHeaders(headers), Redirect::to(location))
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// GET /api/admin/auth/me
pub async fn me(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &admin.email)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundBy {
            entity: "User",
            key: admin.email,
        }))?;

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/admin/auth/logout
///
/// Needs no valid session, so an expired cookie can still be cleared.
pub async fn logout() -> impl IntoResponse {
    tracing::info!("Session cookie cleared");
    (
        AppendHeaders([(SET_COOKIE, cookie::clear(AUTH_COOKIE))]),
        Json(ApiResponse::message("Logged out successfully")),
    )
}

// ---------------------------------------------------------------------------
// OAuth2
// ---------------------------------------------------------------------------

/// GET /oauth2/authorization/{provider}
///
/// Redirects the browser to the provider. The hashed `state` goes into a
/// short-lived cookie checked by the callback.
pub async fn oauth_authorize(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (provider, credentials) = enabled_provider(&state, &provider)?;
    let oauth_config = &state.config.oauth;

    let oauth_state = oauth::generate_state();
    let url = oauth::authorization_url(
        provider,
        credentials,
        &oauth_config.redirect_uri(provider),
        &oauth_state,
    )?;

    let state_cookie = cookie::build(
        OAUTH_STATE_COOKIE,
        &oauth::hash_state(&oauth_state),
        OAUTH_STATE_MAX_AGE_SECS,
        state.config.secure_cookies(),
    );

    Ok(redirect_with(vec![state_cookie], &url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// GET /login/oauth2/code/{provider}
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let (provider, credentials) = enabled_provider(&state, &provider)?;
    let config = &state.config;
    let login_url = format!("{}/admin/login", config.frontend_url);
    let clear_state = cookie::clear(OAUTH_STATE_COOKIE);

    if let Some(error) = params.error {
        tracing::warn!(provider = provider.as_str(), error = %error, "OAuth2 login cancelled");
        return Ok(redirect_with(
            vec![clear_state],
            &format!("{login_url}?error=oauth_failed"),
        ));
    }

    let expected = cookie::read(&headers, OAUTH_STATE_COOKIE);
    let returned = params.state.as_deref().map(oauth::hash_state);
    if expected.is_none() || expected != returned {
        return Err(AppError::BadRequest("Invalid OAuth2 state".into()));
    }
    let code = params
        .code
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".into()))?;

    let access_token = oauth::exchange_code(
        &state.http_client,
        provider,
        credentials,
        &config.oauth.redirect_uri(provider),
        &code,
    )
    .await?;
    let raw_profile = oauth::fetch_profile(&state.http_client, provider, &access_token).await?;
    let profile = oauth::normalize_profile(provider, &raw_profile)?;

    let is_admin = config.is_admin_email(&profile.email);
    let user = UserRepo::upsert_login(
        &state.pool,
        &UpsertUser {
            email: profile.email,
            name: profile.name,
            avatar_url: profile.avatar_url,
            provider: provider.as_str().to_string(),
            provider_id: profile.provider_id,
            is_admin,
        },
    )
    .await?;

    if !user.is_admin {
        tracing::warn!(email = %user.email, provider = provider.as_str(), "Login by non-admin user rejected");
        return Ok(redirect_with(
            vec![clear_state],
            &format!("{login_url}?error=not_authorized"),
        ));
    }

    let token = generate_token(&user.email, user.name.as_deref(), true, &config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to sign session token: {e}")))?;
    let session = cookie::build(
        AUTH_COOKIE,
        &token,
        config.jwt.expiry_secs(),
        config.secure_cookies(),
    );

    tracing::info!(email = %user.email, provider = provider.as_str(), "Admin logged in");

    Ok(redirect_with(
        vec![clear_state, session],
        &format!("{}/admin", config.frontend_url),
    ))
}
