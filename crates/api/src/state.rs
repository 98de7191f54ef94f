use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mail::ContactMailer;
use crate::storage::FileStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Contact-form delivery (SMTP, or log-only when unconfigured).
    pub mailer: Arc<dyn ContactMailer>,
    /// Uploaded media files.
    pub storage: Arc<FileStorage>,
    /// Outbound HTTP client for OAuth2 token exchange and profile lookup.
    pub http_client: reqwest::Client,
}
