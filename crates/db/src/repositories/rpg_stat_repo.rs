//! Repository for the `rpg_stats` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::rpg_stat::{
    join_skills, normalize_attr, CreateRpgStat, RpgStat, UpdateRpgStat, DEFAULT_LEVEL,
    DEFAULT_MAX_LEVEL,
};

const COLUMNS: &str = "\
    id, attr, label_en, label_pl, level, max_level, skills, display_order, \
    created_at, updated_at";

pub struct RpgStatRepo;

impl RpgStatRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<RpgStat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rpg_stats ORDER BY display_order, created_at");
        sqlx::query_as::<_, RpgStat>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RpgStat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rpg_stats WHERE id = $1");
        sqlx::query_as::<_, RpgStat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a stat, applying default levels when omitted.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateRpgStat,
        display_order: i32,
    ) -> Result<RpgStat, sqlx::Error> {
        let attr = normalize_attr(&dto.attr);
        let query = format!(
            "INSERT INTO rpg_stats (attr, label_en, label_pl, level, max_level, skills, \
                                    display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RpgStat>(&query)
            .bind(attr.as_ref())
            .bind(dto.label_en.trim())
            .bind(dto.label_pl.trim())
            .bind(dto.level.unwrap_or(DEFAULT_LEVEL))
            .bind(dto.max_level.unwrap_or(DEFAULT_MAX_LEVEL))
            .bind(dto.skills.as_deref().map(join_skills))
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateRpgStat,
    ) -> Result<Option<RpgStat>, sqlx::Error> {
        let query = format!(
            "UPDATE rpg_stats SET \
                 attr = COALESCE($2, attr), \
                 label_en = COALESCE($3, label_en), \
                 label_pl = COALESCE($4, label_pl), \
                 level = COALESCE($5, level), \
                 max_level = COALESCE($6, max_level), \
                 skills = COALESCE($7, skills), \
                 display_order = COALESCE($8, display_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RpgStat>(&query)
            .bind(id)
            .bind(dto.attr.as_deref().map(|a| normalize_attr(a).into_owned()))
            .bind(dto.label_en.as_deref().map(str::trim))
            .bind(dto.label_pl.as_deref().map(str::trim))
            .bind(dto.level)
            .bind(dto.max_level)
            .bind(dto.skills.as_deref().map(join_skills))
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rpg_stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
