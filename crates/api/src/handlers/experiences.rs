//! Handlers for work experience entries.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::experience::{CreateExperience, ExperienceDto, UpdateExperience};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::ExperienceRepo;
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
        entity: "Experience",
        id,
    })
}

fn check_dates(start: NaiveDate, end: Option<NaiveDate>) -> AppResult<()> {
    match end {
        Some(end) if end < start => Err(AppError::Core(CoreError::Validation(
            "End date must not be before start date".into(),
        ))),
        _ => Ok(()),
    }
}

fn localize_all(
    rows: Vec<folio_db::models::experience::Experience>,
    locale: folio_core::locale::Locale,
) -> Vec<ExperienceDto> {
    rows.into_iter()
        .map(|e| ExperienceDto::localized(e, locale))
        .collect()
}

/// GET /api/experiences
pub async fn list_experiences(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let rows = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(localize_all(rows, locale))))
}

/// GET /api/experiences/{id}
pub async fn get_experience(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(experience_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let experience = ExperienceRepo::find_by_id(&state.pool, experience_id)
        .await?
        .ok_or_else(|| not_found(experience_id))?;

    Ok(Json(ApiResponse::ok(ExperienceDto::localized(
        experience, locale,
    ))))
}

/// GET /api/admin/experiences/{id}
pub async fn admin_get_experience(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_experience(state, lang, id).await
}

/// GET /api/admin/experiences
pub async fn admin_list_experiences(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let rows = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(localize_all(rows, locale))))
}

/// POST /api/admin/experiences
pub async fn create_experience(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let start_date = input
        .start_date
        .ok_or_else(|| AppError::BadRequest("Start date is required".into()))?;
    check_dates(start_date, input.end_date)?;

    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::Experiences).await?,
    };
    let experience =
        ExperienceRepo::create(&state.pool, &input, start_date, display_order).await?;

    tracing::info!(experience_id = %experience.id, admin = %admin.email, "Experience created");

    Ok(Json(ApiResponse::with_message(
        ExperienceDto::localized(experience, locale),
        "Experience created successfully",
    )))
}

/// PUT /api/admin/experiences/{id}
///
/// `endDate` is always written: omitting it marks the position as current.
pub async fn update_experience(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(experience_id): Path<DbId>,
    AppJson(input): AppJson<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let current = ExperienceRepo::find_by_id(&state.pool, experience_id)
        .await?
        .ok_or_else(|| not_found(experience_id))?;
    check_dates(
        input.start_date.unwrap_or(current.start_date),
        input.end_date,
    )?;

    let experience = ExperienceRepo::update(&state.pool, experience_id, &input)
        .await?
        .ok_or_else(|| not_found(experience_id))?;

    tracing::info!(experience_id = %experience_id, admin = %admin.email, "Experience updated");

    Ok(Json(ApiResponse::with_message(
        ExperienceDto::localized(experience, locale),
        "Experience updated successfully",
    )))
}

/// DELETE /api/admin/experiences/{id}
pub async fn delete_experience(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(experience_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ExperienceRepo::delete(&state.pool, experience_id).await? {
        return Err(not_found(experience_id));
    }

    tracing::info!(experience_id = %experience_id, admin = %admin.email, "Experience deleted");
    Ok(Json(ApiResponse::message("Experience deleted successfully")))
}

/// PATCH /api/admin/experiences/reorder
pub async fn reorder_experiences(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::reorder(&state, OrderedTable::Experiences, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/experiences/{id}/move
pub async fn move_experience(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(experience_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::move_to(
        &state,
        OrderedTable::Experiences,
        experience_id,
        input.to_index,
        None,
    )
    .await?;
    Ok(Json(response))
}
