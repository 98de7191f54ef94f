//! Site settings endpoints (singleton row).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::theme::validate_preset_name;
use folio_db::models::site_settings::{SiteSettingsDto, UpdateSiteSettings};
use folio_db::repositories::SiteSettingsRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::json::AppJson;
use crate::middleware::locale::Lang;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(ApiResponse::ok(SiteSettingsDto::localized(
        settings, locale,
    ))))
}

/// GET /api/admin/settings
pub async fn admin_get_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(ApiResponse::ok(SiteSettingsDto::localized(
        settings, locale,
    ))))
}

/// PUT /api/admin/settings
///
/// Partial update. A `theme` must name a known preset.
pub async fn update_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Lang(locale): Lang,
    AppJson(input): AppJson<UpdateSiteSettings>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(theme) = input.theme.as_deref() {
        validate_preset_name(theme)?;
    }

    let settings = SiteSettingsRepo::update(&state.pool, &input).await?;

    tracing::info!(admin = %admin.email, "Site settings updated");

    Ok(Json(ApiResponse::with_message(
        SiteSettingsDto::localized(settings, locale),
        "Settings updated successfully",
    )))
}
