//! Repository for the `posts` table.

use std::collections::HashSet;

use folio_core::category::Category;
use folio_core::slug::{normalize_hashtags, slugify, unique_slug};
use folio_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list for `posts` queries.
const COLUMNS: &str = "\
    id, category, title_en, title_pl, slug, excerpt_en, excerpt_pl, \
    content_en, content_pl, featured_image, github_url, live_url, \
    published, display_order, hashtags, \
    case_study_challenge_en, case_study_challenge_pl, \
    case_study_solution_en, case_study_solution_pl, \
    case_study_results_en, case_study_results_pl, \
    case_study_testimonial_en, case_study_testimonial_pl, \
    case_study_testimonial_author, created_at, updated_at";

/// Provides data access for posts.
pub struct PostRepo;

impl PostRepo {
    // -----------------------------------------------------------------------
    // Public (published only)
    // -----------------------------------------------------------------------

    /// Published posts in display order, optionally filtered.
    ///
    /// Callers pass either a category or a hashtag; when both are given both
    /// filters apply.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<Category>,
        hashtag: Option<&str>,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts \
             WHERE published = TRUE \
               AND ($1::text IS NULL OR category = $1) \
               AND ($2::text IS NULL OR $2 = ANY(hashtags)) \
             ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(category.map(Category::as_str))
            .bind(hashtag)
            .fetch_all(pool)
            .await
    }

    /// One page of published posts plus the total count.
    pub async fn list_published_paged(
        pool: &PgPool,
        category: Option<Category>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Post>, i64), sqlx::Error> {
        let category = category.map(Category::as_str);

        let query = format!(
            "SELECT {COLUMNS} FROM posts \
             WHERE published = TRUE AND ($1::text IS NULL OR category = $1) \
             ORDER BY display_order, created_at \
             LIMIT $2 OFFSET $3"
        );
        let posts = sqlx::query_as::<_, Post>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts \
             WHERE published = TRUE AND ($1::text IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok((posts, total))
    }

    /// Distinct hashtags used by published posts, sorted.
    pub async fn published_hashtags(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT tag FROM posts, unnest(hashtags) AS tag \
             WHERE published = TRUE ORDER BY tag",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE slug = $1 AND published = TRUE");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Published post counts per category value.
    pub async fn published_counts_by_category(
        pool: &PgPool,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) FROM posts WHERE published = TRUE GROUP BY category",
        )
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------------

    /// All posts (published or not) in display order.
    pub async fn list_all(
        pool: &PgPool,
        category: Option<Category>,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts \
             WHERE ($1::text IS NULL OR category = $1) \
             ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(category.map(Category::as_str))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Pick a free slug for `source` (an explicit slug or the English title).
    ///
    /// `exclude` skips the post being updated so it can keep its own slug.
    pub async fn available_slug(
        pool: &PgPool,
        source: &str,
        exclude: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let base = slugify(source);
        let taken: HashSet<String> = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM posts \
             WHERE (slug = $1 OR slug LIKE $2) AND ($3::uuid IS NULL OR id <> $3)",
        )
        .bind(&base)
        .bind(format!("{base}-%"))
        .bind(exclude)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        Ok(unique_slug(&base, |candidate| taken.contains(candidate)))
    }

    /// `MAX(display_order) + 1` within a category, `0` for an empty category.
    pub async fn next_display_order(pool: &PgPool, category: Category) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(MAX(display_order) + 1, 0) FROM posts WHERE category = $1",
        )
        .bind(category.as_str())
        .fetch_one(pool)
        .await
    }

    /// Insert a post with an already-resolved slug and display order.
    pub async fn create(
        pool: &PgPool,
        dto: &CreatePost,
        category: Category,
        slug: &str,
        display_order: i32,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (\
                 category, title_en, title_pl, slug, excerpt_en, excerpt_pl, \
                 content_en, content_pl, featured_image, github_url, live_url, \
                 published, display_order, hashtags, \
                 case_study_challenge_en, case_study_challenge_pl, \
                 case_study_solution_en, case_study_solution_pl, \
                 case_study_results_en, case_study_results_pl, \
                 case_study_testimonial_en, case_study_testimonial_pl, \
                 case_study_testimonial_author) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     $15, $16, $17, $18, $19, $20, $21, $22, $23) \
             RETURNING {COLUMNS}"
        );
        let empty_doc = Value::Object(Default::default());
        sqlx::query_as::<_, Post>(&query)
            .bind(category.as_str())
            .bind(dto.title_en.trim())
            .bind(dto.title_pl.trim())
            .bind(slug)
            .bind(&dto.excerpt_en)
            .bind(&dto.excerpt_pl)
            .bind(dto.content_en.as_ref().unwrap_or(&empty_doc))
            .bind(dto.content_pl.as_ref().unwrap_or(&empty_doc))
            .bind(&dto.featured_image)
            .bind(&dto.github_url)
            .bind(&dto.live_url)
            .bind(dto.published.unwrap_or(false))
            .bind(display_order)
            .bind(normalize_hashtags(dto.hashtags.as_deref().unwrap_or_default()))
            .bind(&dto.case_study_challenge_en)
            .bind(&dto.case_study_challenge_pl)
            .bind(&dto.case_study_solution_en)
            .bind(&dto.case_study_solution_pl)
            .bind(&dto.case_study_results_en)
            .bind(&dto.case_study_results_pl)
            .bind(&dto.case_study_testimonial_en)
            .bind(&dto.case_study_testimonial_pl)
            .bind(&dto.case_study_testimonial_author)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post. `slug` is the resolved new slug, if any.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePost,
        slug: Option<&str>,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET \
                 category = COALESCE($2, category), \
                 title_en = COALESCE($3, title_en), \
                 title_pl = COALESCE($4, title_pl), \
                 slug = COALESCE($5, slug), \
                 excerpt_en = COALESCE($6, excerpt_en), \
                 excerpt_pl = COALESCE($7, excerpt_pl), \
                 content_en = COALESCE($8, content_en), \
                 content_pl = COALESCE($9, content_pl), \
                 featured_image = COALESCE($10, featured_image), \
                 github_url = COALESCE($11, github_url), \
                 live_url = COALESCE($12, live_url), \
                 published = COALESCE($13, published), \
                 display_order = COALESCE($14, display_order), \
                 hashtags = COALESCE($15, hashtags), \
                 case_study_challenge_en = COALESCE($16, case_study_challenge_en), \
                 case_study_challenge_pl = COALESCE($17, case_study_challenge_pl), \
                 case_study_solution_en = COALESCE($18, case_study_solution_en), \
                 case_study_solution_pl = COALESCE($19, case_study_solution_pl), \
                 case_study_results_en = COALESCE($20, case_study_results_en), \
                 case_study_results_pl = COALESCE($21, case_study_results_pl), \
                 case_study_testimonial_en = COALESCE($22, case_study_testimonial_en), \
                 case_study_testimonial_pl = COALESCE($23, case_study_testimonial_pl), \
                 case_study_testimonial_author = COALESCE($24, case_study_testimonial_author) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(dto.category.map(Category::as_str))
            .bind(dto.title_en.as_deref().map(str::trim))
            .bind(dto.title_pl.as_deref().map(str::trim))
            .bind(slug)
            .bind(&dto.excerpt_en)
            .bind(&dto.excerpt_pl)
            .bind(&dto.content_en)
            .bind(&dto.content_pl)
            .bind(&dto.featured_image)
            .bind(&dto.github_url)
            .bind(&dto.live_url)
            .bind(dto.published)
            .bind(dto.display_order)
            .bind(dto.hashtags.as_deref().map(normalize_hashtags))
            .bind(&dto.case_study_challenge_en)
            .bind(&dto.case_study_challenge_pl)
            .bind(&dto.case_study_solution_en)
            .bind(&dto.case_study_solution_pl)
            .bind(&dto.case_study_results_en)
            .bind(&dto.case_study_results_pl)
            .bind(&dto.case_study_testimonial_en)
            .bind(&dto.case_study_testimonial_pl)
            .bind(&dto.case_study_testimonial_author)
            .fetch_optional(pool)
            .await
    }

    /// Flip the `published` flag.
    pub async fn toggle_published(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET published = NOT published WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post. Its media rows cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
