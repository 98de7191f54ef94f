//! Media models and DTOs (uploaded files and YouTube embeds).

use folio_core::locale::Locale;
use folio_core::media::MediaKind;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: DbId,
    pub post_id: Option<DbId>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub media_type: String,
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub url: String,
    pub display_order: i32,
    pub video_url: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
    pub created_at: Timestamp,
}

/// Insert payload assembled by the upload and YouTube handlers.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub post_id: Option<DbId>,
    pub kind: MediaKind,
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub url: String,
    pub video_url: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
    /// `None` appends after the last item of the same post.
    pub display_order: Option<i32>,
}

/// Metadata patch. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct UpdateMedia {
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
    pub post_id: Option<DbId>,
}

/// A media item as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: DbId,
    pub post_id: Option<DbId>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub url: String,
    pub alt_text: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_pl: Option<String>,
    pub display_order: i32,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
}

impl MediaDto {
    pub fn localized(media: Media, locale: Locale) -> Self {
        Self {
            alt_text: locale.pick_opt(&media.alt_text_en, &media.alt_text_pl),
            id: media.id,
            post_id: media.post_id,
            media_type: media.media_type,
            filename: media.filename,
            original_name: media.original_name,
            mime_type: media.mime_type,
            size: media.size,
            url: media.url,
            alt_text_en: media.alt_text_en,
            alt_text_pl: media.alt_text_pl,
            display_order: media.display_order,
            video_url: media.video_url,
            created_at: media.created_at,
        }
    }
}
