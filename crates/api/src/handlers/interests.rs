use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::interest::{CreateInterest, InterestDto, UpdateInterest};
use folio_db::ordering::{next_display_order, OrderedTable};
use folio_db::repositories::InterestRepo;
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
        entity: "Interest",
        id,
    })
}

/// GET /api/interests
pub async fn list_interests(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let data: Vec<InterestDto> = InterestRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|i| InterestDto::localized(i, locale))
        .collect();
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/interests/{id}
pub async fn get_interest(
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(interest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let interest = InterestRepo::find_by_id(&state.pool, interest_id)
        .await?
        .ok_or_else(|| not_found(interest_id))?;
    Ok(Json(ApiResponse::ok(InterestDto::localized(interest, locale))))
}

/// GET /api/admin/interests/{id}
pub async fn admin_get_interest(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    get_interest(state, lang, id).await
}

/// GET /api/admin/interests
pub async fn admin_list_interests(
    RequireAdmin(_admin): RequireAdmin,
    state: State<AppState>,
    lang: Lang,
) -> AppResult<impl IntoResponse> {
    list_interests(state, lang).await
}

/// POST /api/admin/interests
pub async fn create_interest(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<CreateInterest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let display_order = match input.display_order {
        Some(order) => order,
        None => next_display_order(&state.pool, OrderedTable::Interests).await?,
    };
    let interest = InterestRepo::create(&state.pool, &input, display_order).await?;

    tracing::info!(interest_id = %interest.id, admin = %admin.email, "Interest created");

    Ok(Json(ApiResponse::with_message(
        InterestDto::localized(interest, locale),
        "Interest created successfully",
    )))
}

/// PUT /api/admin/interests/{id}
pub async fn update_interest(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    Path(interest_id): Path<DbId>,
    AppJson(input): AppJson<UpdateInterest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let interest = InterestRepo::update(&state.pool, interest_id, &input)
        .await?
        .ok_or_else(|| not_found(interest_id))?;

    tracing::info!(interest_id = %interest_id, admin = %admin.email, "Interest updated");

    Ok(Json(ApiResponse::with_message(
        InterestDto::localized(interest, locale),
        "Interest updated successfully",
    )))
}

/// DELETE /api/admin/interests/{id}
pub async fn delete_interest(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(interest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !InterestRepo::delete(&state.pool, interest_id).await? {
        return Err(not_found(interest_id));
    }
    tracing::info!(interest_id = %interest_id, admin = %admin.email, "Interest deleted");
    Ok(Json(ApiResponse::message("Interest deleted successfully")))
}

/// PATCH /api/admin/interests/reorder
pub async fn reorder_interests(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let response = ordering::reorder(&state, OrderedTable::Interests, &input.items, None).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/interests/{id}/move
pub async fn move_interest(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(interest_id): Path<DbId>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let response =
        ordering::move_to(&state, OrderedTable::Interests, interest_id, input.to_index, None)
            .await?;
    Ok(Json(response))
}
