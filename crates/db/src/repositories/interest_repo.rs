//! Repository for the `interests` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::interest::{CreateInterest, Interest, UpdateInterest};

const COLUMNS: &str =
    "id, title_en, title_pl, image1, image2, image3, display_order, created_at, updated_at";

pub struct InterestRepo;

impl InterestRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Interest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interests ORDER BY display_order, created_at");
        sqlx::query_as::<_, Interest>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Interest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interests WHERE id = $1");
        sqlx::query_as::<_, Interest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateInterest,
        display_order: i32,
    ) -> Result<Interest, sqlx::Error> {
        let query = format!(
            "INSERT INTO interests (title_en, title_pl, image1, image2, image3, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interest>(&query)
            .bind(dto.title_en.trim())
            .bind(dto.title_pl.trim())
            .bind(&dto.image1)
            .bind(&dto.image2)
            .bind(&dto.image3)
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateInterest,
    ) -> Result<Option<Interest>, sqlx::Error> {
        let query = format!(
            "UPDATE interests SET \
                 title_en = COALESCE($2, title_en), \
                 title_pl = COALESCE($3, title_pl), \
                 image1 = COALESCE($4, image1), \
                 image2 = COALESCE($5, image2), \
                 image3 = COALESCE($6, image3), \
                 display_order = COALESCE($7, display_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interest>(&query)
            .bind(id)
            .bind(dto.title_en.as_deref().map(str::trim))
            .bind(dto.title_pl.as_deref().map(str::trim))
            .bind(&dto.image1)
            .bind(&dto.image2)
            .bind(&dto.image3)
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
