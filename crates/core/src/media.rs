//! Media kinds, MIME classification and YouTube URL handling.
//!
//! Uploaded files are grouped on disk by MIME family and served back with a
//! content type derived from their extension. YouTube items are stored as
//! embed URLs without a backing file.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Media kind
-------------------------------------------------------------------------- */

/// What a media row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    Image,
    Video,
    Pdf,
    Youtube,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [Self::Image, Self::Video, Self::Pdf, Self::Youtube];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Pdf => "PDF",
            Self::Youtube => "YOUTUBE",
        }
    }

    /// Parse the database / query-string value (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let upper = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == upper)
            .ok_or_else(|| CoreError::Validation(format!("Unknown media type: '{value}'")))
    }

    /// Classify an uploaded file. Unknown families are treated as images.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime == "application/pdf" {
            Self::Pdf
        } else {
            Self::Image
        }
    }
}

/* --------------------------------------------------------------------------
Storage layout
-------------------------------------------------------------------------- */

pub const SUBDIR_IMAGES: &str = "images";
pub const SUBDIR_VIDEOS: &str = "videos";
pub const SUBDIR_DOCUMENTS: &str = "documents";
pub const SUBDIR_OTHER: &str = "other";

/// Subdirectory of the upload root a file with this MIME type lands in.
pub fn storage_subdir(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        SUBDIR_IMAGES
    } else if mime.starts_with("video/") {
        SUBDIR_VIDEOS
    } else if mime == "application/pdf" {
        SUBDIR_DOCUMENTS
    } else {
        SUBDIR_OTHER
    }
}

/// Longest extension kept from a client-supplied file name.
pub const MAX_EXTENSION_LEN: usize = 10;

/// Extension of `name` including the leading dot, or an empty string.
///
/// A leading dot alone (`.env`) does not count as an extension. Only short
/// ASCII alphanumeric extensions are returned, so the result is always safe
/// to append to a generated file name.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = &name[idx + 1..];
            let valid = !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.bytes().all(|b| b.is_ascii_alphanumeric());
            if valid {
                &name[idx..]
            } else {
                ""
            }
        }
        _ => "",
    }
}

/// Content type to serve a stored file with, chosen from its extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = file_extension(filename).trim_start_matches('.').to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Whether a single path component is safe to join onto the upload root.
pub fn is_safe_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains('\0')
}

/* --------------------------------------------------------------------------
YouTube
-------------------------------------------------------------------------- */

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("valid regex")
});

/// Extract the 11-character video id from a watch, embed or short URL.
pub fn youtube_video_id(url: &str) -> Result<String, CoreError> {
    YOUTUBE_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::Validation("Invalid YouTube URL".to_string()))
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
