//! Admin users, created on first OAuth2 login.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    #[serde(skip_serializing)]
    pub provider_id: Option<String>,
    pub is_admin: bool,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub last_login_at: Option<Timestamp>,
}

/// Profile data normalized from an OAuth2 provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertUser {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    pub provider_id: Option<String>,
    pub is_admin: bool,
}
