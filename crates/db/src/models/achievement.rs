//! Achievement models.

use folio_core::locale::Locale;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: DbId,
    pub title_en: String,
    pub title_pl: String,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub icon: Option<String>,
    /// Free-form ("2023", "2019-2021").
    pub year: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievement {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: String,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub icon: Option<String>,
    pub year: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievement {
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: Option<String>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub icon: Option<String>,
    pub year: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: DbId,
    pub title: String,
    pub title_en: String,
    pub title_pl: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub icon: Option<String>,
    pub year: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AchievementDto {
    pub fn localized(a: Achievement, locale: Locale) -> Self {
        Self {
            title: locale.pick(&a.title_en, &a.title_pl).clone(),
            description: locale.pick_opt(&a.description_en, &a.description_pl),
            id: a.id,
            title_en: a.title_en,
            title_pl: a.title_pl,
            description_en: a.description_en,
            description_pl: a.description_pl,
            icon: a.icon,
            year: a.year,
            display_order: a.display_order,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
