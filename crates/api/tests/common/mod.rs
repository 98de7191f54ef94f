#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_token, JwtConfig};
use folio_api::auth::oauth::OAuthConfig;
use folio_api::config::ServerConfig;
use folio_api::mail::build_mailer;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::storage::{FileStorage, UploadConfig};

pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const FRONTEND_URL: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uploads go to a fresh directory under the system temp dir; SMTP and
/// OAuth providers are left unconfigured.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![FRONTEND_URL.to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 1,
        },
        frontend_url: FRONTEND_URL.to_string(),
        admin_emails: vec![ADMIN_EMAIL.to_string()],
        upload: UploadConfig {
            root: std::env::temp_dir().join(format!("folio-test-{}", uuid::Uuid::new_v4())),
            allowed_types: ["image/png", "image/jpeg", "application/pdf"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_bytes: 1024 * 1024,
        },
        contact_recipient: None,
        smtp: None,
        oauth: OAuthConfig {
            github: None,
            google: None,
            redirect_base: "http://localhost:8080".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, &test_config())
}

/// Like [`build_test_app`], but with an explicit config. Tests that upload a
/// file and read it back must share one config so they share the upload root.
pub fn build_test_app_with(pool: PgPool, config: &ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: build_mailer(None, None),
        storage: Arc::new(FileStorage::new(config.upload.clone())),
        http_client: reqwest::Client::new(),
    };
    build_app_router(state, config)
}

/// Session token for the whitelisted admin.
pub fn admin_token() -> String {
    generate_token(ADMIN_EMAIL, Some("Owner"), true, &test_config().jwt).unwrap()
}

/// Session token for a signed-in user without the admin flag.
pub fn visitor_token() -> String {
    generate_token("visitor@example.com", None, false, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_lang(app: Router, uri: &str, lang: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(ACCEPT_LANGUAGE, lang)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, Some(token), body)).await
}

/// Body-less request with a bearer token, e.g. `DELETE` or a bare `POST`.
pub async fn send_auth(app: Router, method: Method, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send_auth(app, Method::DELETE, uri, token).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a post through the admin API and return its `data` payload.
pub async fn create_post(app: Router, title: &str, published: bool) -> serde_json::Value {
    let body = serde_json::json!({
        "category": "PERSONAL_PROJECT",
        "titleEn": title,
        "titlePl": format!("{title} PL"),
        "published": published,
    });
    let response = post_json_auth(app, "/api/admin/posts", body, &admin_token()).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
