//! Colour preset endpoints.
//!
//! Presets are a static table in `folio_core::theme`; the active preset name
//! lives in the site settings.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::theme::{self, ThemePreset};
use folio_db::repositories::SiteSettingsRepo;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A preset as served to the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub name: &'static str,
    pub label: &'static str,
    /// `primary50`..`primary950`, `accent`, `dark50`..`dark950`.
    pub colors: Map<String, Value>,
    /// Ready-to-inject `:root` declarations.
    pub css_variables: String,
    pub active: bool,
}

impl ThemeDto {
    fn new(preset: &ThemePreset, active: &str) -> Self {
        Self {
            name: preset.name,
            label: preset.label,
            colors: preset
                .tokens()
                .into_iter()
                .map(|(key, value)| (key, Value::String(value.to_string())))
                .collect(),
            css_variables: preset.css_variables(),
            active: preset.name == active,
        }
    }
}

/// GET /api/themes
pub async fn list_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    let active = theme::resolve(&settings.theme).name;
    let data: Vec<ThemeDto> = theme::PRESETS
        .iter()
        .map(|p| ThemeDto::new(p, active))
        .collect();

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/themes/{name}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let preset = theme::find(&name).ok_or(AppError::Core(CoreError::NotFoundBy {
        entity: "Theme",
        key: name.clone(),
    }))?;
    let settings = SiteSettingsRepo::get(&state.pool).await?;

    Ok(Json(ApiResponse::ok(ThemeDto::new(
        preset,
        theme::resolve(&settings.theme).name,
    ))))
}

/// POST /api/admin/themes/next
///
/// Switch the site to the preset after the active one (wraps around).
pub async fn cycle_theme(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    let next = theme::next(&settings.theme);
    SiteSettingsRepo::set_theme(&state.pool, next.name).await?;

    tracing::info!(theme = next.name, admin = %admin.email, "Theme switched");

    Ok(Json(ApiResponse::with_message(
        ThemeDto::new(next, next.name),
        format!("Theme changed to {}", next.label),
    )))
}
