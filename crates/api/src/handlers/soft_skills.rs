//! Handlers for soft skills.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSoftSkill, SoftSkillDto, UpdateSoftSkill};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::{SkillCategoryRepo, SoftSkillRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::ordering::{self, MoveRequest, ReorderRequest};
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// `?categoryId=` or `?uncategorized=true`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillFilter {
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub uncategorized: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SoftSkill",
        id,
    })
}

/// A skill may only point at an existing category.
async fn ensure_category(state: &AppState, category_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = category_id {
        if !SkillCategoryRepo::exists(&state.pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "SkillCategory",
                id,
            }));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/soft-skills?categoryId=&uncategorized=
pub async fn list_soft_skills(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Query(filter): Query<SkillFilter>,
) -> AppResult<impl IntoResponse> {
    let skills = match (filter.category_id, filter.uncategorized) {
        (Some(id), _) => SoftSkillRepo::list_by_category(&state.pool, Some(id)).await?,
        (None, true) => SoftSkillRepo::list_by_category(&state.pool, None).await?,
        (None, false) => SoftSkillRepo::list(&state.pool).await?,
    };
    let data: Vec<SoftSkillDto> = skills
        .into_iter()
        .map(|s| SoftSkillDto::localized(s, locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/soft-skills/{id}
pub async fn get_soft_skill(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(skill_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = SoftSkillRepo::find_by_id(&state.pool, skill_id)
        .await?
        .ok_or_else(|| not_found(skill_id))?;

    Ok(Json(ApiResponse::ok(SoftSkillDto::localized(skill, locale))))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/admin/soft-skills/{id}
pub async fn admin_get_soft_skill(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_soft_skill(state, lang, id).await
}

/// GET /api/admin/soft-skills
pub async fn admin_list_soft_skills(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let data: Vec<SoftSkillDto> = SoftSkillRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|s| SoftSkillDto::localized(s, locale))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// POST /api/admin/soft-skills
pub async fn create_soft_skill(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateSoftSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_category(&state, input.category_id).await?;

    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::SoftSkills).await?,
    };
    let skill = SoftSkillRepo::create(&state.pool, &input, display_order).await?;

    tracing::info!(skill_id = %skill.id, admin = %admin.email, "Soft skill created");

    Ok(Json(ApiResponse::with_message(
        SoftSkillDto::localized(skill, locale),
        "Soft skill created successfully",
    )))
}

/// PUT /api/admin/soft-skills/{id}
pub async fn update_soft_skill(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(skill_id): Path<DbId>,
    AppJson(input): AppJson<UpdateSoftSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_category(&state, input.category_id).await?;

    let skill = SoftSkillRepo::update(&state.pool, skill_id, &input)
        .await?
        .ok_or_else(|| not_found(skill_id))?;

    tracing::info!(skill_id = %skill_id, admin = %admin.email, "Soft skill updated");

    Ok(Json(ApiResponse::with_message(
        SoftSkillDto::localized(skill, locale),
        "Soft skill updated successfully",
    )))
}

/// DELETE /api/admin/soft-skills/{id}
pub async fn delete_soft_skill(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(skill_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SoftSkillRepo::delete(&state.pool, skill_id).await? {
        return Err(not_found(skill_id));
    }

    tracing::info!(skill_id = %skill_id, admin = %admin.email, "Soft skill deleted");
    Ok(Json(ApiResponse::message("Soft skill deleted successfully")))
}

/// PATCH /api/admin/soft-skills/reorder
pub async fn reorder_soft_skills(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::reorder(&state, OrderedTable::SoftSkills, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/soft-skills/{id}/move
pub async fn move_soft_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(skill_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::move_to(&state, OrderedTable::SoftSkills, skill_id, input.to_index, None)
            .await?;
    Ok(Json(response))
}
