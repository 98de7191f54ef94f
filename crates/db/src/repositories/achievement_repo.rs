//! Repository for the `achievements` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{Achievement, CreateAchievement, UpdateAchievement};

const COLUMNS: &str = "\
    id, title_en, title_pl, description_en, description_pl, icon, year, \
    display_order, created_at, updated_at";

pub struct AchievementRepo;

impl AchievementRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM achievements ORDER BY display_order, created_at");
        sqlx::query_as::<_, Achievement>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements WHERE id = $1");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateAchievement,
        display_order: i32,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (title_en, title_pl, description_en, description_pl, \
                                       icon, year, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(dto.title_en.trim())
            .bind(dto.title_pl.trim())
            .bind(&dto.description_en)
            .bind(&dto.description_pl)
            .bind(&dto.icon)
            .bind(&dto.year)
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateAchievement,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "UPDATE achievements SET \
                 title_en = COALESCE($2, title_en), \
                 title_pl = COALESCE($3, title_pl), \
                 description_en = COALESCE($4, description_en), \
                 description_pl = COALESCE($5, description_pl), \
                 icon = COALESCE($6, icon), \
                 year = COALESCE($7, year), \
                 display_order = COALESCE($8, display_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .bind(dto.title_en.as_deref().map(str::trim))
            .bind(dto.title_pl.as_deref().map(str::trim))
            .bind(&dto.description_en)
            .bind(&dto.description_pl)
            .bind(&dto.icon)
            .bind(&dto.year)
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
