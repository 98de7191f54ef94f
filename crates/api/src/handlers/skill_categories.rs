//! Handlers for soft-skill categories.
//!
//! Deleting a category keeps its skills; they become uncategorized.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{
    CreateSkillCategory, SkillCategoryDto, SkillCategoryWithSkillsDto, UpdateSkillCategory,
};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::{SkillCategoryRepo, SoftSkillRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::ordering::{self, MoveRequest, ReorderRequest};
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SkillCategory",
        id,
    })
}

/// GET /api/skill-categories
pub async fn list_skill_categories(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let data: Vec<SkillCategoryDto> = SkillCategoryRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|c| SkillCategoryDto::localized(c, locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/skill-categories/with-skills
///
/// Categories in display order, each with its skills nested.
pub async fn list_with_skills(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let categories = SkillCategoryRepo::list(&state.pool).await?;
    let skills = SoftSkillRepo::list(&state.pool).await?;

    Ok(Json(ApiResponse::ok(SkillCategoryWithSkillsDto::group(
        categories, skills, locale,
    ))))
}

/// GET /api/skill-categories/{id}
pub async fn get_skill_category(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = SkillCategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| not_found(category_id))?;

    Ok(Json(ApiResponse::ok(SkillCategoryDto::localized(
        category, locale,
    ))))
}

/// GET /api/admin/skill-categories/{id}
pub async fn admin_get_skill_category(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_skill_category(state, lang, id).await
}

/// GET /api/admin/skill-categories
pub async fn admin_list_skill_categories(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
) -> AppResult<impl IntoResponse> {
    list_skill_categories(state, lang).await
}

/// POST /api/admin/skill-categories
pub async fn create_skill_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateSkillCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::SkillCategories).await?,
    };
    let category = SkillCategoryRepo::create(&state.pool, &input, display_order).await?;

    tracing::info!(category_id = %category.id, admin = %admin.email, "Skill category created");

    Ok(Json(ApiResponse::with_message(
        SkillCategoryDto::localized(category, locale),
        "Skill category created successfully",
    )))
}

/// PUT /api/admin/skill-categories/{id}
pub async fn update_skill_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(category_id): Path<DbId>,
    AppJson(input): AppJson<UpdateSkillCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let category = SkillCategoryRepo::update(&state.pool, category_id, &input)
        .await?
        .ok_or_else(|| not_found(category_id))?;

    tracing::info!(category_id = %category_id, admin = %admin.email, "Skill category updated");

    Ok(Json(ApiResponse::with_message(
        SkillCategoryDto::localized(category, locale),
        "Skill category updated successfully",
    )))
}

/// DELETE /api/admin/skill-categories/{id}
pub async fn delete_skill_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SkillCategoryRepo::delete(&state.pool, category_id).await? {
        return Err(not_found(category_id));
    }

    tracing::info!(category_id = %category_id, admin = %admin.email, "Skill category deleted");
    Ok(Json(ApiResponse::message(
        "Skill category deleted successfully",
    )))
}

/// PATCH /api/admin/skill-categories/reorder
pub async fn reorder_skill_categories(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::reorder(&state, OrderedTable::SkillCategories, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/skill-categories/{id}/move
pub async fn move_skill_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::move_to(
        &state,
        OrderedTable::SkillCategories,
        category_id,
        input.to_index,
        None,
    )
    .await?;
    Ok(Json(response))
}
