//! Repositories for `soft_skills` and `skill_categories`.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{
    CreateSkillCategory, CreateSoftSkill, SkillCategory, SoftSkill, UpdateSkillCategory,
    UpdateSoftSkill,
};

/// Skill columns with the category names joined in. Alias `s` / `c`.
const SKILL_COLUMNS: &str = "\
    s.id, s.name_en, s.name_pl, s.description_en, s.description_pl, \
    s.professional_usage_en, s.professional_usage_pl, s.icon, s.level, \
    s.display_order, s.category_id, \
    c.name_en AS category_name_en, c.name_pl AS category_name_pl, \
    s.created_at, s.updated_at";

const SKILL_FROM: &str = "soft_skills s LEFT JOIN skill_categories c ON c.id = s.category_id";

/// Category columns with the live skill count.
const CATEGORY_COLUMNS: &str = "\
    id, name_en, name_pl, display_order, \
    (SELECT COUNT(*) FROM soft_skills s WHERE s.category_id = skill_categories.id) AS skill_count, \
    created_at, updated_at";

/// Provides data access for soft skills.
pub struct SoftSkillRepo;

impl SoftSkillRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SoftSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS} FROM {SKILL_FROM} ORDER BY s.display_order, s.created_at"
        );
        sqlx::query_as::<_, SoftSkill>(&query).fetch_all(pool).await
    }

    /// Skills in one category, or uncategorized skills when `category_id` is `None`.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<SoftSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS} FROM {SKILL_FROM} \
             WHERE s.category_id IS NOT DISTINCT FROM $1 \
             ORDER BY s.display_order, s.created_at"
        );
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SoftSkill>, sqlx::Error> {
        let query = format!("SELECT {SKILL_COLUMNS} FROM {SKILL_FROM} WHERE s.id = $1");
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a skill and return it with its category names.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateSoftSkill,
        display_order: i32,
    ) -> Result<SoftSkill, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO soft_skills (name_en, name_pl, description_en, description_pl, \
                                      professional_usage_en, professional_usage_pl, icon, \
                                      level, display_order, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id",
        )
        .bind(dto.name_en.trim())
        .bind(dto.name_pl.trim())
        .bind(&dto.description_en)
        .bind(&dto.description_pl)
        .bind(&dto.professional_usage_en)
        .bind(&dto.professional_usage_pl)
        .bind(&dto.icon)
        .bind(dto.level)
        .bind(display_order)
        .bind(dto.category_id)
        .fetch_one(pool)
        .await?;

        let query = format!("SELECT {SKILL_COLUMNS} FROM {SKILL_FROM} WHERE s.id = $1");
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSoftSkill,
    ) -> Result<Option<SoftSkill>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE soft_skills SET \
                 name_en = COALESCE($2, name_en), \
                 name_pl = COALESCE($3, name_pl), \
                 description_en = COALESCE($4, description_en), \
                 description_pl = COALESCE($5, description_pl), \
                 professional_usage_en = COALESCE($6, professional_usage_en), \
                 professional_usage_pl = COALESCE($7, professional_usage_pl), \
                 icon = COALESCE($8, icon), \
                 level = COALESCE($9, level), \
                 display_order = COALESCE($10, display_order), \
                 category_id = COALESCE($11, category_id) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(dto.name_en.as_deref().map(str::trim))
        .bind(dto.name_pl.as_deref().map(str::trim))
        .bind(&dto.description_en)
        .bind(&dto.description_pl)
        .bind(&dto.professional_usage_en)
        .bind(&dto.professional_usage_pl)
        .bind(&dto.icon)
        .bind(dto.level)
        .bind(dto.display_order)
        .bind(dto.category_id)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM soft_skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides data access for skill categories.
pub struct SkillCategoryRepo;

impl SkillCategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SkillCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM skill_categories ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, SkillCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SkillCategory>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM skill_categories WHERE id = $1");
        sqlx::query_as::<_, SkillCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM skill_categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateSkillCategory,
        display_order: i32,
    ) -> Result<SkillCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_categories (name_en, name_pl, display_order) \
             VALUES ($1, $2, $3) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, SkillCategory>(&query)
            .bind(dto.name_en.trim())
            .bind(dto.name_pl.trim())
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSkillCategory,
    ) -> Result<Option<SkillCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE skill_categories SET \
                 name_en = COALESCE($2, name_en), \
                 name_pl = COALESCE($3, name_pl), \
                 display_order = COALESCE($4, display_order) \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, SkillCategory>(&query)
            .bind(id)
            .bind(dto.name_en.as_deref().map(str::trim))
            .bind(dto.name_pl.as_deref().map(str::trim))
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Its skills become uncategorized.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
