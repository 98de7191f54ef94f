//! Handlers for the RPG-style stat blocks.
//!
//! Validation goes through the DTOs' `check` methods, which add the
//! `level <= maxLevel` rule on top of the field validators.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::rpg_stat::{CreateRpgStat, RpgStatDto, UpdateRpgStat};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::RpgStatRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ordering::{self, MoveRequest, ReorderRequest};
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "RpgStat",
        id,
    })
}

/// GET /api/rpg-stats
pub async fn list_rpg_stats(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let data: Vec<RpgStatDto> = RpgStatRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|s| RpgStatDto::localized(s, locale))
        .collect();
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/rpg-stats/{id}
pub async fn get_rpg_stat(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(stat_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stat = RpgStatRepo::find_by_id(&state.pool, stat_id)
        .await?
        .ok_or_else(|| not_found(stat_id))?;
    Ok(Json(ApiResponse::ok(RpgStatDto::localized(stat, locale))))
}

/// GET /api/admin/rpg-stats/{id}
pub async fn admin_get_rpg_stat(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_rpg_stat(state, lang, id).await
}

/// GET /api/admin/rpg-stats
pub async fn admin_list_rpg_stats(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
) -> AppResult<impl IntoResponse> {
    list_rpg_stats(state, lang).await
}

/// POST /api/admin/rpg-stats
pub async fn create_rpg_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateRpgStat>,
) -> AppResult<impl IntoResponse> {
    input.check()?;
    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::RpgStats).await?,
    };
    let stat = RpgStatRepo::create(&state.pool, &input, display_order).await?;

    tracing::info!(stat_id = %stat.id, attr = %stat.attr, admin = %admin.email, "RPG stat created");

    Ok(Json(ApiResponse::with_message(
        RpgStatDto::localized(stat, locale),
        "RPG stat created successfully",
    )))
}

/// PUT /api/admin/rpg-stats/{id}
pub async fn update_rpg_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(stat_id): Path<DbId>,
    AppJson(input): AppJson<UpdateRpgStat>,
) -> AppResult<impl IntoResponse> {
    let current = RpgStatRepo::find_by_id(&state.pool, stat_id)
        .await?
        .ok_or_else(|| not_found(stat_id))?;
    input.check(&current)?;

    let stat = RpgStatRepo::update(&state.pool, stat_id, &input)
        .await?
        .ok_or_else(|| not_found(stat_id))?;

    tracing::info!(stat_id = %stat_id, admin = %admin.email, "RPG stat updated");

    Ok(Json(ApiResponse::with_message(
        RpgStatDto::localized(stat, locale),
        "RPG stat updated successfully",
    )))
}

/// DELETE /api/admin/rpg-stats/{id}
pub async fn delete_rpg_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(stat_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !RpgStatRepo::delete(&state.pool, stat_id).await? {
        return Err(not_found(stat_id));
    }
    tracing::info!(stat_id = %stat_id, admin = %admin.email, "RPG stat deleted");
    Ok(Json(ApiResponse::message("RPG stat deleted successfully")))
}

/// PATCH /api/admin/rpg-stats/reorder
pub async fn reorder_rpg_stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::reorder(&state, OrderedTable::RpgStats, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/rpg-stats/{id}/move
pub async fn move_rpg_stat(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(stat_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::move_to(&state, OrderedTable::RpgStats, stat_id, input.to_index, None).await?;
    Ok(Json(response))
}
