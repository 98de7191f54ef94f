//! Handlers for portfolio posts.
//!
//! Public endpoints only ever see published posts. Admin endpoints see
//! everything and own the slug and display-order rules.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::category::Category;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::post::{CreatePost, PostDto, UpdatePost};
use folio_db::ordering::OrderedTable;
use folio_db::repositories::{MediaRepo, PostRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::ordering::{self, MoveRequest, ReorderRequest};
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{CategoryFilter, PageParams, PostFilter, POSTS_PAGE_SIZE};
use crate::response::{ApiResponse, PageResponse};
use crate::state::AppState;

/// Parse an optional `?category=` value. Blank means "no filter".
fn parse_category(raw: Option<&str>) -> AppResult<Option<Category>> {
    match raw.map(str::trim).filter(|c| !c.is_empty()) {
        Some(value) => Ok(Some(value.parse()?)),
        None => Ok(None),
    }
}

fn post_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/posts?category=&hashtag=
///
/// Published posts in display order. A hashtag filter takes precedence over
/// the category filter.
pub async fn list_posts(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(filter): Query<PostFilter>,
) -> AppResult<impl IntoResponse> {
    let hashtag = filter
        .hashtag
        .as_deref()
        .map(|h| h.trim().trim_start_matches('#'))
        .filter(|h| !h.is_empty());

    let category = match hashtag {
        Some(_) => None,
        None => parse_category(filter.category.as_deref())?,
    };

    let posts = PostRepo::list_published(&state.pool, category, hashtag).await?;
    let data: Vec<PostDto> = posts
        .into_iter()
        .map(|p| PostDto::summary(p, locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/posts/hashtags
pub async fn list_hashtags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = PostRepo::published_hashtags(&state.pool).await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// GET /api/posts/paged?category=&page=&size=
pub async fn list_posts_paged(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(filter): Query<CategoryFilter>,
    Query(paging): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let category = parse_category(filter.category.as_deref())?;
    let (page, size, limit, offset) = paging.limit_offset(POSTS_PAGE_SIZE);

    let (posts, total) =
        PostRepo::list_published_paged(&state.pool, category, limit, offset).await?;
    let content = posts
        .into_iter()
        .map(|p| PostDto::summary(p, locale))
        .collect();

    Ok(Json(ApiResponse::ok(PageResponse::new(
        content, total, page, size,
    ))))
}

/// GET /api/posts/{slug}
///
/// A published post with both content documents, rendered HTML and its
/// gallery. Unpublished posts are reported as missing.
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundBy {
            entity: "Post",
            key: slug,
        }))?;

    let media = MediaRepo::list_by_post(&state.pool, post.id).await?;
    Ok(Json(ApiResponse::ok(PostDto::detail(post, media, locale))))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/admin/posts?category=
///
/// All posts, published or not.
pub async fn admin_list_posts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<impl IntoResponse> {
    let category = parse_category(filter.category.as_deref())?;
    let posts = PostRepo::list_all(&state.pool, category).await?;
    let data: Vec<PostDto> = posts
        .into_iter()
        .map(|p| PostDto::summary(p, locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/admin/posts/{id}
pub async fn admin_get_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    let media = MediaRepo::list_by_post(&state.pool, post_id).await?;

    Ok(Json(ApiResponse::ok(PostDto::detail(post, media, locale))))
}

/// POST /api/admin/posts
///
/// Missing slug is derived from the English title and made unique; missing
/// display order appends to the end of the category.
pub async fn create_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreatePost>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let category = input
        .category
        .ok_or_else(|| AppError::BadRequest("Category is required".into()))?;

    let slug_source = input
        .slug
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(input.title_en.as_str());
    let slug = PostRepo::available_slug(&state.pool, slug_source, None).await?;

    let display_order = match input.display_order {
        Some(order) => order,
        None => PostRepo::next_display_order(&state.pool, category).await?,
    };

    let post = PostRepo::create(&state.pool, &input, category, &slug, display_order).await?;

    tracing::info!(
        post_id = %post.id,
        slug = %post.slug,
        admin = %admin.email,
        "Post created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            PostDto::detail(post, Vec::new(), locale),
            "Post created successfully",
        )),
    ))
}

/// PUT /api/admin/posts/{id}
///
/// Partial update. A changed slug is re-checked for uniqueness.
pub async fn update_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(post_id): Path<DbId>,
    AppJson(input): AppJson<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let current = PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    let slug = match input.slug.as_deref().map(str::trim) {
        Some(requested) if !requested.is_empty() && requested != current.slug => {
            Some(PostRepo::available_slug(&state.pool, requested, Some(post_id)).await?)
        }
        _ => None,
    };

    let post = PostRepo::update(&state.pool, post_id, &input, slug.as_deref())
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    let media = MediaRepo::list_by_post(&state.pool, post_id).await?;

    tracing::info!(post_id = %post_id, admin = %admin.email, "Post updated");

    Ok(Json(ApiResponse::with_message(
        PostDto::detail(post, media, locale),
        "Post updated successfully",
    )))
}

/// PATCH /api/admin/posts/{id}/publish
pub async fn toggle_publish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::toggle_published(&state.pool, post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    let message = if post.published {
        "Post published successfully"
    } else {
        "Post unpublished successfully"
    };
    tracing::info!(
        post_id = %post_id,
        published = post.published,
        admin = %admin.email,
        "Post publish state toggled",
    );

    Ok(Json(ApiResponse::with_message(
        PostDto::summary(post, locale),
        message,
    )))
}

/// DELETE /api/admin/posts/{id}
///
/// Media rows go with the post (`ON DELETE CASCADE`); their stored files are
/// removed afterwards.
pub async fn delete_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let files = MediaRepo::uploaded_for_post(&state.pool, post_id).await?;

    if !PostRepo::delete(&state.pool, post_id).await? {
        return Err(post_not_found(post_id));
    }

    for media in files {
        if let Some(path) = media.filename.as_deref() {
            if let Err(e) = state.storage.delete(path).await {
                tracing::warn!(media_id = %media.id, error = %e, "Failed to delete media file");
            }
        }
    }

    tracing::info!(post_id = %post_id, admin = %admin.email, "Post deleted");
    Ok(Json(ApiResponse::message("Post deleted successfully")))
}

/// PATCH /api/admin/posts/reorder
pub async fn reorder_posts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::reorder(&state, OrderedTable::Posts, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/posts/{id}/move
pub async fn move_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::move_to(&state, OrderedTable::Posts, post_id, input.to_index, None).await?;
    Ok(Json(response))
}
