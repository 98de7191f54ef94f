//! RPG-style stat blocks shown on the about page.
//!
//! Skills are stored as a single comma-joined text column and exposed as a
//! list.

use std::borrow::Cow;

use folio_core::locale::Locale;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{level_in_range, not_blank};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const DEFAULT_LEVEL: i32 = 5;
pub const DEFAULT_MAX_LEVEL: i32 = 10;

/// Width of the `attr` column, in characters.
pub const MAX_ATTR_LEN: usize = 10;

/// A row from the `rpg_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpgStat {
    pub id: DbId,
    pub attr: String,
    pub label_en: String,
    pub label_pl: String,
    pub level: i32,
    pub max_level: i32,
    pub skills: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Join a skill list for storage.
pub fn join_skills(skills: &[String]) -> String {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split the stored column back into trimmed, non-empty entries.
pub fn split_skills(stored: Option<&str>) -> Vec<String> {
    stored
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRpgStat {
    #[serde(default)]
    #[validate(custom(function = "attr_code"))]
    pub attr: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English label is required"))]
    pub label_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish label is required"))]
    pub label_pl: String,
    pub level: Option<i32>,
    pub max_level: Option<i32>,
    pub skills: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

impl CreateRpgStat {
    /// Field validation plus the `level <= maxLevel` rule on the defaults.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        let level = self.level.unwrap_or(DEFAULT_LEVEL);
        let max_level = self.max_level.unwrap_or(DEFAULT_MAX_LEVEL);
        if let Err(err) = level_in_range(level, max_level) {
            errors.add("level", err);
        }
        if errors.field_errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRpgStat {
    #[validate(custom(function = "attr_code"))]
    pub attr: Option<String>,
    #[validate(custom(function = "not_blank", message = "English label is required"))]
    pub label_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish label is required"))]
    pub label_pl: Option<String>,
    pub level: Option<i32>,
    pub max_level: Option<i32>,
    pub skills: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

impl UpdateRpgStat {
    /// Field validation plus the level rule against the stored row.
    pub fn check(&self, current: &RpgStat) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        let level = self.level.unwrap_or(current.level);
        let max_level = self.max_level.unwrap_or(current.max_level);
        if let Err(err) = level_in_range(level, max_level) {
            errors.add("level", err);
        }
        if errors.field_errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpgStatDto {
    pub id: DbId,
    pub attr: String,
    pub label: String,
    pub label_en: String,
    pub label_pl: String,
    pub level: i32,
    pub max_level: i32,
    pub skills: Vec<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RpgStatDto {
    pub fn localized(stat: RpgStat, locale: Locale) -> Self {
        Self {
            label: locale.pick(&stat.label_en, &stat.label_pl).clone(),
            skills: split_skills(stat.skills.as_deref()),
            id: stat.id,
            attr: stat.attr,
            label_en: stat.label_en,
            label_pl: stat.label_pl,
            level: stat.level,
            max_level: stat.max_level,
            display_order: stat.display_order,
            created_at: stat.created_at,
            updated_at: stat.updated_at,
        }
    }
}

/// Uppercase attribute codes so `str` and `STR` are the same stat.
pub fn normalize_attr(attr: &str) -> Cow<'_, str> {
    let trimmed = attr.trim();
    if trimmed.chars().any(|c| c.is_lowercase()) {
        Cow::Owned(trimmed.to_uppercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Presence and length of the code as it will be stored.
fn attr_code(attr: &str) -> Result<(), ValidationError> {
    let message = if not_blank(attr).is_err() {
        "Attribute code is required".to_string()
    } else if normalize_attr(attr).chars().count() > MAX_ATTR_LEN {
        format!("Attribute code must be at most {MAX_ATTR_LEN} characters")
    } else {
        return Ok(());
    };
    let mut err = ValidationError::new("attr");
    err.message = Some(Cow::Owned(message));
    Err(err)
}
