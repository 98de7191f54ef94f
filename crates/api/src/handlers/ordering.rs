//! Shared drag-and-drop endpoints.
//!
//! Every sortable admin list exposes the same two operations:
//!
//! - `PATCH /admin/{entity}/reorder` persists a full `(id, displayOrder)`
//!   list computed by the client.
//! - `PATCH /admin/{entity}/{id}/move` runs the move on the server and
//!   persists the renumbered list.
//!
//! The entity handler modules wrap these helpers with their own
//! [`OrderedTable`].

use folio_core::ordering::{validate_reorder, ReorderItem};
use folio_core::types::DbId;
use folio_db::ordering::{apply_reorder, move_to_index, OrderedTable};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Body of a bulk reorder request.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// Body of a single move request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub to_index: usize,
}

pub const ORDER_UPDATED: &str = "Order updated successfully";

/// Validate and persist a client-computed order.
pub async fn reorder(
    state: &AppState,
    table: OrderedTable,
    items: &[ReorderItem],
    scope: Option<DbId>,
) -> AppResult<ApiResponse<()>> {
    validate_reorder(items)?;
    apply_reorder(&state.pool, table, items, scope).await?;

    tracing::info!(
        table = table.table_name(),
        count = items.len(),
        "Display order updated"
    );
    Ok(ApiResponse::message(ORDER_UPDATED))
}

/// Move `id` to `to_index` and return the persisted order.
pub async fn move_to(
    state: &AppState,
    table: OrderedTable,
    id: DbId,
    to_index: usize,
    scope: Option<DbId>,
) -> AppResult<ApiResponse<Vec<ReorderItem>>> {
    let items = move_to_index(&state.pool, table, id, to_index, scope).await?;

    tracing::info!(
        table = table.table_name(),
        id = %id,
        to_index,
        "Item moved"
    );
    Ok(ApiResponse::with_message(items, ORDER_UPDATED))
}
