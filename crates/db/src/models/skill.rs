//! Soft skill and skill category models.
//!
//! Skills optionally belong to a category. Deleting a category leaves its
//! skills uncategorized (`ON DELETE SET NULL`).

use folio_core::locale::Locale;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from `soft_skills`, joined with its category's names.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkill {
    pub id: DbId,
    pub name_en: String,
    pub name_pl: String,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub professional_usage_en: Option<String>,
    pub professional_usage_pl: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub display_order: i32,
    pub category_id: Option<DbId>,
    pub category_name_en: Option<String>,
    pub category_name_pl: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `skill_categories` with the number of skills in it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: DbId,
    pub name_en: String,
    pub name_pl: String,
    pub display_order: i32,
    pub skill_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSoftSkill {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English name is required"))]
    pub name_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish name is required"))]
    pub name_pl: String,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub professional_usage_en: Option<String>,
    pub professional_usage_pl: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Level must be between 1 and 10"))]
    pub level: Option<i32>,
    pub display_order: Option<i32>,
    pub category_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSoftSkill {
    #[validate(custom(function = "not_blank", message = "English name is required"))]
    pub name_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish name is required"))]
    pub name_pl: Option<String>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub professional_usage_en: Option<String>,
    pub professional_usage_pl: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Level must be between 1 and 10"))]
    pub level: Option<i32>,
    pub display_order: Option<i32>,
    pub category_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillCategory {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "English name is required"))]
    pub name_en: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Polish name is required"))]
    pub name_pl: String,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillCategory {
    #[validate(custom(function = "not_blank", message = "English name is required"))]
    pub name_en: Option<String>,
    #[validate(custom(function = "not_blank", message = "Polish name is required"))]
    pub name_pl: Option<String>,
    pub display_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Localized views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillDto {
    pub id: DbId,
    pub name: String,
    pub name_en: String,
    pub name_pl: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub description_pl: Option<String>,
    pub professional_usage: Option<String>,
    pub professional_usage_en: Option<String>,
    pub professional_usage_pl: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub display_order: i32,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SoftSkillDto {
    pub fn localized(skill: SoftSkill, locale: Locale) -> Self {
        Self {
            name: locale.pick(&skill.name_en, &skill.name_pl).clone(),
            description: locale.pick_opt(&skill.description_en, &skill.description_pl),
            professional_usage: locale
                .pick_opt(&skill.professional_usage_en, &skill.professional_usage_pl),
            category_name: locale.pick_opt(&skill.category_name_en, &skill.category_name_pl),
            id: skill.id,
            name_en: skill.name_en,
            name_pl: skill.name_pl,
            description_en: skill.description_en,
            description_pl: skill.description_pl,
            professional_usage_en: skill.professional_usage_en,
            professional_usage_pl: skill.professional_usage_pl,
            icon: skill.icon,
            level: skill.level,
            display_order: skill.display_order,
            category_id: skill.category_id,
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryDto {
    pub id: DbId,
    pub name: String,
    pub name_en: String,
    pub name_pl: String,
    pub display_order: i32,
    pub skill_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SkillCategoryDto {
    pub fn localized(category: SkillCategory, locale: Locale) -> Self {
        Self {
            name: locale.pick(&category.name_en, &category.name_pl).clone(),
            id: category.id,
            name_en: category.name_en,
            name_pl: category.name_pl,
            display_order: category.display_order,
            skill_count: category.skill_count,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// A category with its skills nested, for the public skills page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryWithSkillsDto {
    pub id: DbId,
    pub name: String,
    pub name_en: String,
    pub name_pl: String,
    pub display_order: i32,
    pub skills: Vec<SoftSkillDto>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SkillCategoryWithSkillsDto {
    /// Attach the skills whose `category_id` matches, keeping their order.
    pub fn group(
        categories: Vec<SkillCategory>,
        skills: Vec<SoftSkill>,
        locale: Locale,
    ) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| {
                let nested = skills
                    .iter()
                    .filter(|s| s.category_id == Some(category.id))
                    .cloned()
                    .map(|s| SoftSkillDto::localized(s, locale))
                    .collect();
                Self {
                    name: locale.pick(&category.name_en, &category.name_pl).clone(),
                    id: category.id,
                    name_en: category.name_en,
                    name_pl: category.name_pl,
                    display_order: category.display_order,
                    skills: nested,
                    created_at: category.created_at,
                    updated_at: category.updated_at,
                }
            })
            .collect()
    }
}
