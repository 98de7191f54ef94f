//! Display-order persistence shared by all sortable tables.
//!
//! Table names are never taken from user input: every query is built from
//! the static names on [`OrderedTable`].

use folio_core::ordering::{reorder_after_move, ReorderItem};
use folio_core::types::DbId;
use sqlx::PgPool;

/// A table with a `display_order` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedTable {
    Posts,
    Media,
    SoftSkills,
    SkillCategories,
    Experiences,
    Interests,
    Achievements,
    RpgStats,
}

impl OrderedTable {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Media => "media",
            Self::SoftSkills => "soft_skills",
            Self::SkillCategories => "skill_categories",
            Self::Experiences => "experiences",
            Self::Interests => "interests",
            Self::Achievements => "achievements",
            Self::RpgStats => "rpg_stats",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Posts => "Post",
            Self::Media => "Media",
            Self::SoftSkills => "SoftSkill",
            Self::SkillCategories => "SkillCategory",
            Self::Experiences => "Experience",
            Self::Interests => "Interest",
            Self::Achievements => "Achievement",
            Self::RpgStats => "RpgStat",
        }
    }

    /// Column that partitions the table into independently ordered lists.
    fn scope_column(self) -> Option<&'static str> {
        match self {
            Self::Media => Some("post_id"),
            _ => None,
        }
    }
}

/// Failure modes of a bulk reorder.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// An id in the request does not exist (or is outside the scope).
    /// Nothing was written.
    #[error("{entity} with id {id} not found")]
    Missing { entity: &'static str, id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// `MAX(display_order) + 1` for an unscoped table, `0` when empty.
pub async fn next_display_order(pool: &PgPool, table: OrderedTable) -> Result<i32, sqlx::Error> {
    let query = format!(
        "SELECT COALESCE(MAX(display_order) + 1, 0) FROM {}",
        table.table_name()
    );
    sqlx::query_scalar::<_, i32>(&query).fetch_one(pool).await
}

/// Persist every `(id, display_order)` pair in one transaction.
///
/// When `scope` is given (media only), each id must also belong to that
/// scope. A single missing id rolls the whole batch back.
pub async fn apply_reorder(
    pool: &PgPool,
    table: OrderedTable,
    items: &[ReorderItem],
    scope: Option<DbId>,
) -> Result<(), ReorderError> {
    let query = match (table.scope_column(), scope) {
        (Some(column), Some(_)) => format!(
            "UPDATE {} SET display_order = $2 WHERE id = $1 AND {column} = $3",
            table.table_name()
        ),
        _ => format!(
            "UPDATE {} SET display_order = $2 WHERE id = $1",
            table.table_name()
        ),
    };

    let mut tx = pool.begin().await?;
    for item in items {
        let mut q = sqlx::query(&query).bind(item.id).bind(item.display_order);
        if table.scope_column().is_some() {
            if let Some(scope_id) = scope {
                q = q.bind(scope_id);
            }
        }
        let result = q.execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(ReorderError::Missing {
                entity: table.entity(),
                id: item.id,
            });
        }
    }
    tx.commit().await?;

    tracing::debug!(
        table = table.table_name(),
        count = items.len(),
        "Display order updated"
    );
    Ok(())
}

/// Ids in current display order. Ties keep creation order.
pub async fn ordered_ids(
    pool: &PgPool,
    table: OrderedTable,
    scope: Option<DbId>,
) -> Result<Vec<DbId>, sqlx::Error> {
    match (table.scope_column(), scope) {
        (Some(column), Some(scope_id)) => {
            let query = format!(
                "SELECT id FROM {} WHERE {column} = $1 ORDER BY display_order, created_at, id",
                table.table_name()
            );
            sqlx::query_scalar::<_, DbId>(&query)
                .bind(scope_id)
                .fetch_all(pool)
                .await
        }
        _ => {
            let query = format!(
                "SELECT id FROM {} ORDER BY display_order, created_at, id",
                table.table_name()
            );
            sqlx::query_scalar::<_, DbId>(&query).fetch_all(pool).await
        }
    }
}

/// Move one row to `to_index` within its list and renumber the list `0..n`.
///
/// Returns the persisted order.
pub async fn move_to_index(
    pool: &PgPool,
    table: OrderedTable,
    id: DbId,
    to_index: usize,
    scope: Option<DbId>,
) -> Result<Vec<ReorderItem>, MoveError> {
    let ids = ordered_ids(pool, table, scope).await?;
    let from = ids
        .iter()
        .position(|candidate| *candidate == id)
        .ok_or(ReorderError::Missing {
            entity: table.entity(),
            id,
        })?;

    let items = reorder_after_move(&ids, from, to_index)?;
    apply_reorder(pool, table, &items, scope).await?;
    Ok(items)
}

/// Failure modes of [`move_to_index`].
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Reorder(#[from] ReorderError),

    /// The target index is outside the list.
    #[error(transparent)]
    Core(#[from] folio_core::error::CoreError),
}

impl From<sqlx::Error> for MoveError {
    fn from(err: sqlx::Error) -> Self {
        MoveError::Reorder(ReorderError::Database(err))
    }
}
