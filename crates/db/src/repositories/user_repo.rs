//! Repository for the `users` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{UpsertUser, User};

const COLUMNS: &str =
    "id, email, name, avatar_url, provider, provider_id, is_admin, created_at, last_login_at";

pub struct UserRepo;

impl UserRepo {
    /// Create the user on first login, otherwise refresh name, avatar and
    /// admin flag. The provider of the first login is kept. Always stamps
    /// `last_login_at`.
    pub async fn upsert_login(pool: &PgPool, input: &UpsertUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, avatar_url, provider, provider_id, is_admin, \
                                last_login_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW()) \
             ON CONFLICT (email) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 avatar_url = EXCLUDED.avatar_url, \
                 is_admin = EXCLUDED.is_admin, \
                 last_login_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.email.to_lowercase())
            .bind(&input.name)
            .bind(&input.avatar_url)
            .bind(&input.provider)
            .bind(&input.provider_id)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email.to_lowercase())
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
