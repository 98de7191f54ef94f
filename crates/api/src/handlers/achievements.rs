use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::achievement::{AchievementDto, CreateAchievement, UpdateAchievement};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::AchievementRepo;
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
        entity: "Achievement",
        id,
    })
}

/// GET /api/achievements
pub async fn list_achievements(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let data: Vec<AchievementDto> = AchievementRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|a| AchievementDto::localized(a, locale))
        .collect();
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/achievements/{id}
pub async fn get_achievement(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(achievement_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let achievement = AchievementRepo::find_by_id(&state.pool, achievement_id)
        .await?
        .ok_or_else(|| not_found(achievement_id))?;
    Ok(Json(ApiResponse::ok(AchievementDto::localized(
        achievement,
        locale,
    ))))
}

/// GET /api/admin/achievements/{id}
pub async fn admin_get_achievement(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_achievement(state, lang, id).await
}

/// GET /api/admin/achievements
pub async fn admin_list_achievements(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
) -> AppResult<impl IntoResponse> {
    list_achievements(state, lang).await
}

/// POST /api/admin/achievements
pub async fn create_achievement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateAchievement>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::Achievements).await?,
    };
    let achievement = AchievementRepo::create(&state.pool, &input, display_order).await?;

    tracing::info!(achievement_id = %achievement.id, admin = %admin.email, "Achievement created");

    Ok(Json(ApiResponse::with_message(
        AchievementDto::localized(achievement, locale),
        "Achievement created successfully",
    )))
}

/// PUT /api/admin/achievements/{id}
pub async fn update_achievement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(achievement_id): Path<DbId>,
    AppJson(input): AppJson<UpdateAchievement>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let achievement = AchievementRepo::update(&state.pool, achievement_id, &input)
        .await?
        .ok_or_else(|| not_found(achievement_id))?;

    tracing::info!(achievement_id = %achievement_id, admin = %admin.email, "Achievement updated");

    Ok(Json(ApiResponse::with_message(
        AchievementDto::localized(achievement, locale),
        "Achievement updated successfully",
    )))
}

/// DELETE /api/admin/achievements/{id}
pub async fn delete_achievement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(achievement_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AchievementRepo::delete(&state.pool, achievement_id).await? {
        return Err(not_found(achievement_id));
    }
    tracing::info!(achievement_id = %achievement_id, admin = %admin.email, "Achievement deleted");
    Ok(Json(ApiResponse::message("Achievement deleted successfully")))
}

/// PATCH /api/admin/achievements/reorder
pub async fn reorder_achievements(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::reorder(&state, OrderedTable::Achievements, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/achievements/{id}/move
pub async fn move_achievement(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(achievement_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::move_to(
        &state,
        OrderedTable::Achievements,
        achievement_id,
        input.to_index,
        None,
    )
    .await?;
    Ok(Json(response))
}
