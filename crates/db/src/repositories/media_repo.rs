//! Repository for the `media` table.

use folio_core::media::MediaKind;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media, UpdateMedia};

const COLUMNS: &str = "\
    id, post_id, type, filename, original_name, mime_type, size, url, \
    display_order, video_url, alt_text_en, alt_text_pl, created_at";

/// Provides data access for media items.
pub struct MediaRepo;

impl MediaRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A post's gallery in display order.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE post_id = $1 \
             ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Newest-first page of the media library, optionally by kind.
    pub async fn list_paged(
        pool: &PgPool,
        kind: Option<MediaKind>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Media>, i64), sqlx::Error> {
        let kind = kind.map(MediaKind::as_str);

        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE ($1::text IS NULL OR type = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Media>(&query)
            .bind(kind)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE ($1::text IS NULL OR type = $1)")
                .bind(kind)
                .fetch_one(pool)
                .await?;

        Ok((items, total))
    }

    /// Newest-first page of media not attached to any post.
    pub async fn list_unassigned_paged(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Media>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE post_id IS NULL \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Media>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE post_id IS NULL")
            .fetch_one(pool)
            .await?;

        Ok((items, total))
    }

    /// Insert a media row. Without an explicit order the item goes last
    /// among the media of the same post (or of the unassigned pool).
    pub async fn create(pool: &PgPool, dto: &CreateMedia) -> Result<Media, sqlx::Error> {
        let display_order = match dto.display_order {
            Some(order) => order,
            None => Self::next_display_order(pool, dto.post_id).await?,
        };

        let query = format!(
            "INSERT INTO media (post_id, type, filename, original_name, mime_type, size, url, \
                                display_order, video_url, alt_text_en, alt_text_pl) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(dto.post_id)
            .bind(dto.kind.as_str())
            .bind(&dto.filename)
            .bind(&dto.original_name)
            .bind(&dto.mime_type)
            .bind(dto.size)
            .bind(&dto.url)
            .bind(display_order)
            .bind(&dto.video_url)
            .bind(&dto.alt_text_en)
            .bind(&dto.alt_text_pl)
            .fetch_one(pool)
            .await
    }

    pub async fn next_display_order(
        pool: &PgPool,
        post_id: Option<DbId>,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(MAX(display_order) + 1, 0) FROM media \
             WHERE post_id IS NOT DISTINCT FROM $1",
        )
        .bind(post_id)
        .fetch_one(pool)
        .await
    }

    /// Update alt texts and/or attach the item to a post.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET \
                 alt_text_en = COALESCE($2, alt_text_en), \
                 alt_text_pl = COALESCE($3, alt_text_pl), \
                 post_id = COALESCE($4, post_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&dto.alt_text_en)
            .bind(&dto.alt_text_pl)
            .bind(dto.post_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media row and return it, so the caller can remove the file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("DELETE FROM media WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A post's media that have a stored file (YouTube items have none).
    pub async fn uploaded_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE post_id = $1 AND filename IS NOT NULL"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }
}
