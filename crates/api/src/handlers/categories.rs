//! Post category endpoints. Categories are a fixed enum; only the counts
//! come from the database.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::category::Category;
use folio_core::error::CoreError;
use folio_db::models::post::CategoryDto;
use folio_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::locale::Lang;
use crate::response::ApiResponse;
use crate::state::AppState;

async fn published_counts(state: &AppState) -> AppResult<HashMap<String, i64>> {
    Ok(PostRepo::published_counts_by_category(&state.pool)
        .await?
        .into_iter()
        .collect())
}

/// GET /api/categories
///
/// Every category with its label and number of published posts.
pub async fn list_categories(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let counts = published_counts(&state).await?;
    let data: Vec<CategoryDto> = Category::ALL
        .into_iter()
        .map(|c| CategoryDto::new(c, counts.get(c.as_str()).copied().unwrap_or(0), locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/categories/{category}
pub async fn get_category(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(raw): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category: Category = raw.parse().map_err(|_| {
        AppError::Core(CoreError::NotFoundBy {
            entity: "Category",
            key: raw.clone(),
        })
    })?;
    let counts = published_counts(&state).await?;
    let count = counts.get(category.as_str()).copied().unwrap_or(0);

    Ok(Json(ApiResponse::ok(CategoryDto::new(category, count, locale))))
}
