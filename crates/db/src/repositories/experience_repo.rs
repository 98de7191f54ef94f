//! Repository for the `experiences` table.

use chrono::NaiveDate;
use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

const COLUMNS: &str = "\
    id, title_en, title_pl, company, start_date, end_date, \
    description_en, description_pl, achievements_en, achievements_pl, \
    display_order, created_at, updated_at";

/// Provides data access for work experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences ORDER BY display_order, start_date DESC"
        );
        sqlx::query_as::<_, Experience>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an entry. `start_date` has already been checked by validation.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateExperience,
        start_date: NaiveDate,
        display_order: i32,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences (title_en, title_pl, company, start_date, end_date, \
                                      description_en, description_pl, \
                                      achievements_en, achievements_pl, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(dto.title_en.trim())
            .bind(dto.title_pl.trim())
            .bind(dto.company.trim())
            .bind(start_date)
            .bind(dto.end_date)
            .bind(&dto.description_en)
            .bind(&dto.description_pl)
            .bind(Json(dto.achievements_en.clone().unwrap_or_default()))
            .bind(Json(dto.achievements_pl.clone().unwrap_or_default()))
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    /// Partial update; `end_date` is always overwritten.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET \
                 title_en = COALESCE($2, title_en), \
                 title_pl = COALESCE($3, title_pl), \
                 company = COALESCE($4, company), \
                 start_date = COALESCE($5, start_date), \
                 end_date = $6, \
                 description_en = COALESCE($7, description_en), \
                 description_pl = COALESCE($8, description_pl), \
                 achievements_en = COALESCE($9, achievements_en), \
                 achievements_pl = COALESCE($10, achievements_pl), \
                 display_order = COALESCE($11, display_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(dto.title_en.as_deref().map(str::trim))
            .bind(dto.title_pl.as_deref().map(str::trim))
            .bind(dto.company.as_deref().map(str::trim))
            .bind(dto.start_date)
            .bind(dto.end_date)
            .bind(&dto.description_en)
            .bind(&dto.description_pl)
            .bind(dto.achievements_en.clone().map(Json))
            .bind(dto.achievements_pl.clone().map(Json))
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
