//! Shared response envelope types for API handlers.
//!
//! Every JSON response uses the `{ "success": bool, "data": ..., "message"?: ... }`
//! envelope. Errors use the same shape with `success: false` (see
//! [`crate::error::AppError`]).

use serde::Serialize;

/// Standard success envelope.
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(items)))
/// Ok(Json(ApiResponse::with_message(post, "Post created successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload (`"data": null`), e.g. deletes.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: (),
            message: Some(message.into()),
        }
    }
}

/// One page of a paged listing. `number` is 0-based.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
    pub first: bool,
    pub last: bool,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(content: Vec<T>, total_elements: i64, page: i64, size: i64) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };
        Self {
            content,
            total_elements,
            total_pages,
            size,
            number: page,
            first: page == 0,
            last: page.saturating_add(1) >= total_pages,
        }
    }
}
