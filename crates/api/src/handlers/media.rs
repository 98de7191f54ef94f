//! Handlers for the media library: file uploads, YouTube embeds and the
//! per-post galleries.
//!
//! Uploaded files live under the storage root as `{subdir}/{uuid}{ext}` and
//! are served back through `/api/media/{subdir}/{filename}`.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::media::{content_type_for, youtube_embed_url, youtube_video_id, MediaKind};
use folio_core::types::DbId;
use folio_db::models::media::{CreateMedia, MediaDto, UpdateMedia};
use folio_db::ordering::OrderedTable;
use folio_db::repositories::{MediaRepo, PostRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::ordering::{self, MoveRequest, ReorderRequest};
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{PageParams, MEDIA_PAGE_SIZE};
use crate::response::{ApiResponse, PageResponse};
use crate::state::AppState;

/// Prefix of the public URL an uploaded file is served from.
const MEDIA_URL_PREFIX: &str = "/api/media";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Media",
        id,
    })
}

async fn ensure_post(state: &AppState, post_id: DbId) -> AppResult<()> {
    if PostRepo::exists(&state.pool, post_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: post_id,
        }))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct MediaTypeFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeParams {
    pub video_url: String,
    pub post_id: Option<DbId>,
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaParams {
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
    pub post_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryParams {
    pub post_id: DbId,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(media_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::find_by_id(&state.pool, media_id)
        .await?
        .ok_or_else(|| not_found(media_id))?;
    Ok(Json(ApiResponse::ok(MediaDto::localized(media, locale))))
}

/// GET /api/media/{subdir}/{filename}
///
/// Streams a stored file inline with a content type derived from its
/// extension.
pub async fn serve_file(
    State(state): State<AppState>,
    Path((subdir, filename)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let bytes = state.storage.load(&format!("{subdir}/{filename}")).await?;

    Ok((
        [
            (CONTENT_TYPE, content_type_for(&filename).to_string()),
            (CONTENT_DISPOSITION, format!("inline; filename=\"{filename}\"")),
        ],
        bytes,
    ))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/admin/media?type=&page=&size=
pub async fn admin_list_media(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(filter): Query<MediaTypeFilter>,
    Query(paging): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let kind = match filter.kind.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Some(MediaKind::parse(value)?),
        _ => None,
    };
    let (page, size, limit, offset) = paging.limit_offset(MEDIA_PAGE_SIZE);

    let (items, total) = MediaRepo::list_paged(&state.pool, kind, limit, offset).await?;
    let content = items
        .into_iter()
        .map(|m| MediaDto::localized(m, locale))
        .collect();

    Ok(Json(ApiResponse::ok(PageResponse::new(
        content, total, page, size,
    ))))
}

/// GET /api/admin/media/unassigned?page=&size=
pub async fn admin_list_unassigned(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(paging): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (page, size, limit, offset) = paging.limit_offset(MEDIA_PAGE_SIZE);

    let (items, total) = MediaRepo::list_unassigned_paged(&state.pool, limit, offset).await?;
    let content = items
        .into_iter()
        .map(|m| MediaDto::localized(m, locale))
        .collect();

    Ok(Json(ApiResponse::ok(PageResponse::new(
        content, total, page, size,
    ))))
}

/// POST /api/admin/media (multipart)
///
/// Fields: `file` (required), `postId`, `altTextEn`, `altTextPl`.
pub async fn upload_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut post_id: Option<DbId> = None;
    let mut alt_text_en: Option<String> = None;
    let mut alt_text_pl: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                file = Some((original_name, content_type, data.to_vec()));
            }
            "postId" | "altTextEn" | "altTextPl" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                let value = non_blank(Some(value));
                match name.as_str() {
                    "postId" => {
                        post_id = value
                            .map(|v| v.parse::<DbId>())
                            .transpose()
                            .map_err(|_| AppError::BadRequest("Invalid postId".into()))?;
                    }
                    "altTextEn" => alt_text_en = value,
                    _ => alt_text_pl = value,
                }
            }
            _ => {}
        }
    }

    let (original_name, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;
    if let Some(post_id) = post_id {
        ensure_post(&state, post_id).await?;
    }

    let stored = state
        .storage
        .store(&original_name, &content_type, &data)
        .await?;

    let input = CreateMedia {
        post_id,
        kind: MediaKind::from_mime(&content_type),
        filename: Some(stored.relative_path.clone()),
        original_name: Some(original_name),
        mime_type: Some(content_type),
        size: Some(stored.size),
        url: format!("{MEDIA_URL_PREFIX}/{}", stored.relative_path),
        video_url: None,
        alt_text_en,
        alt_text_pl,
        display_order: None,
    };

    let media = match MediaRepo::create(&state.pool, &input).await {
        Ok(media) => media,
        Err(e) => {
            if let Err(cleanup) = state.storage.delete(&stored.relative_path).await {
                tracing::warn!(path = %stored.relative_path, error = %cleanup, "Failed to remove orphaned upload");
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        media_id = %media.id,
        path = %stored.relative_path,
        size = stored.size,
        admin = %admin.email,
        "Media uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            MediaDto::localized(media, locale),
            "Media uploaded successfully",
        )),
    ))
}

/// POST /api/admin/media/youtube?videoUrl=&postId=&altTextEn=&altTextPl=
pub async fn create_youtube(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(params): Query<YoutubeParams>,
) -> AppResult<impl IntoResponse> {
    let video_id = youtube_video_id(&params.video_url)?;
    if let Some(post_id) = params.post_id {
        ensure_post(&state, post_id).await?;
    }

    let input = CreateMedia {
        post_id: params.post_id,
        kind: MediaKind::Youtube,
        filename: None,
        original_name: None,
        mime_type: None,
        size: None,
        url: youtube_embed_url(&video_id),
        video_url: Some(params.video_url),
        alt_text_en: non_blank(params.alt_text_en),
        alt_text_pl: non_blank(params.alt_text_pl),
        display_order: None,
    };
    let media = MediaRepo::create(&state.pool, &input).await?;

    tracing::info!(media_id = %media.id, video_id = %video_id, admin = %admin.email, "YouTube media created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            MediaDto::localized(media, locale),
            "YouTube media created successfully",
        )),
    ))
}

/// PUT /api/admin/media/{id}?altTextEn=&altTextPl=&postId=
pub async fn update_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(media_id): Path<DbId>,
    Query(params): Query<UpdateMediaParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(post_id) = params.post_id {
        ensure_post(&state, post_id).await?;
    }

    let patch = UpdateMedia {
        alt_text_en: params.alt_text_en,
        alt_text_pl: params.alt_text_pl,
        post_id: params.post_id,
    };
    let media = MediaRepo::update(&state.pool, media_id, &patch)
        .await?
        .ok_or_else(|| not_found(media_id))?;

    tracing::info!(media_id = %media_id, admin = %admin.email, "Media updated");

    Ok(Json(ApiResponse::with_message(
        MediaDto::localized(media, locale),
        "Media updated successfully",
    )))
}

/// DELETE /api/admin/media/{id}
pub async fn delete_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::delete(&state.pool, media_id)
        .await?
        .ok_or_else(|| not_found(media_id))?;

    if let Some(path) = media.filename.as_deref() {
        if let Err(e) = state.storage.delete(path).await {
            tracing::warn!(media_id = %media_id, error = %e, "Failed to delete media file");
        }
    }

    tracing::info!(media_id = %media_id, admin = %admin.email, "Media deleted");
    Ok(Json(ApiResponse::message("Media deleted successfully")))
}

/// PATCH /api/admin/media/reorder?postId=
pub async fn reorder_media(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_post(&state, params.post_id).await?;
    let response = ordering::reorder(
        &state,
        OrderedTable::Media,
        &input.items,
        Some(params.post_id),
    )
    .await?;
    Ok(Json(response))
}

/// PATCH /api/admin/media/{id}/move
///
/// Moves the item within its post's gallery.
pub async fn move_media(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::find_by_id(&state.pool, media_id)
        .await?
        .ok_or_else(|| not_found(media_id))?;
    let post_id = media
        .post_id
        .ok_or_else(|| AppError::BadRequest("Media is not attached to a post".into()))?;

    let response = ordering::move_to(
        &state,
        OrderedTable::Media,
        media_id,
        input.to_index,
        Some(post_id),
    )
    .await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_values_are_dropped() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" Cover ".into())).as_deref(), Some("Cover"));
        assert_eq!(non_blank(None), None);
    }
}
