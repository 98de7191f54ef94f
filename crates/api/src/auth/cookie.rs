//! `Set-Cookie` construction and `Cookie` header lookup.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Cookie holding the session JWT.
pub const AUTH_COOKIE: &str = "auth_token";

/// Short-lived cookie holding the hashed OAuth2 `state` value.
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Lifetime of the OAuth2 state cookie.
pub const OAUTH_STATE_MAX_AGE_SECS: i64 = 600;

/// Build an `HttpOnly; SameSite=Lax` cookie scoped to `/`.
pub fn build(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{name}={value}; Max-Age={max_age_secs}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a cookie that makes the browser drop `name` immediately.
pub fn clear(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax")
}

/// Find a cookie value across all `Cookie` headers.
pub fn read(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
