//! Personal interest models (title plus up to three images).

use folio_core::locale::Locale;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: DbId,
    pub title_en: String,
    pub title_pl: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterest {
    #[validate(custom(function = "not_blank", message = "English title is required"))]
    pub title_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish title is required"))]
    pub title_pl: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestDto {
    pub id: DbId,
    pub title: String,
    pub title_en: String,
    pub title_pl: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InterestDto {
    pub fn localized(interest: Interest, locale: Locale) -> Self {
        Self {
            title: locale.pick(&interest.title_en, &interest.title_pl).clone(),
            id: interest.id,
            title_en: interest.title_en,
            title_pl: interest.title_pl,
            image1: interest.image1,
            image2: interest.image2,
            image3: interest.image3,
            display_order: interest.display_order,
            created_at: interest.created_at,
            updated_at: interest.updated_at,
        }
    }
}
