//! Work experience models.

use chrono::NaiveDate;
use folio_core::locale::Locale;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `experiences` table. `end_date = NULL` means "current".
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: DbId,
    pub title_en: String,
    pub title_pl: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub achievements_en: Json<Vec<String>>,
    pub achievements_pl: Json<Vec<String>>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperience {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: String,
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub achievements_en: Option<Vec<String>>,
    pub achievements_pl: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

/// Partial update. `endDate` is always written, so omitting it (or sending
/// `null`) marks the position as current.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperience {
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: Option<String>,
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub achievements_en: Option<Vec<String>>,
    pub achievements_pl: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDto {
    pub id: DbId,
    pub title: String,
    pub title_en: String,
    pub title_pl: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub achievements: Vec<String>,
    pub achievements_en: Vec<String>,
    pub achievements_pl: Vec<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ExperienceDto {
    pub fn localized(exp: Experience, locale: Locale) -> Self {
        let Json(achievements_en) = exp.achievements_en;
        let Json(achievements_pl) = exp.achievements_pl;
        Self {
            title: locale.pick(&exp.title_en, &exp.title_pl).clone(),
            description: locale.pick_opt(&exp.description_en, &exp.description_pl),
            achievements: locale.pick(&achievements_en, &achievements_pl).clone(),
            current: exp.end_date.is_none(),
            id: exp.id,
            title_en: exp.title_en,
            title_pl: exp.title_pl,
            company: exp.company,
            start_date: exp.start_date,
            end_date: exp.end_date,
            description_en: exp.description_en,
            description_pl: exp.description_pl,
            achievements_en,
            achievements_pl,
            display_order: exp.display_order,
            created_at: exp.created_at,
            updated_at: exp.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_company_and_start_date() {
        let dto = CreateExperience {
            title_en: "Engineer".into(),
            title_pl: "Inżynier".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("company"));
        assert!(fields.contains_key("start_date"));
        assert!(!fields.contains_key("title_en"));
    }

    #[test]
    fn dates_parse_from_iso_strings() {
        let dto: CreateExperience = serde_json::from_value(serde_json::json!({
            "titleEn": "Engineer",
            "titlePl": "Inżynier",
            "company": "Acme",
            "startDate": "2021-03-01",
            "achievementsEn": ["Shipped v2"]
        }))
        .unwrap();
        assert_eq!(dto.start_date, NaiveDate::from_ymd_opt(2021, 3, 1));
        assert!(dto.end_date.is_none());
        assert!(dto.validate().is_ok());
    }
}
