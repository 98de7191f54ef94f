//! Display-order maintenance for drag-and-drop lists.
//!
//! The admin lists are reordered by moving one item from index `from` to
//! index `to`, then renumbering the whole list so that `display_order`
//! equals the item's position. The resulting `(id, display_order)` pairs are
//! persisted in a single bulk call.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// One entry of a bulk reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub id: DbId,
    pub display_order: i32,
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// Elements between the two positions shift by one to fill the gap.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), CoreError> {
    let len = items.len();
    if from >= len || to >= len {
        return Err(CoreError::Validation(format!(
            "Move out of range: from {from} to {to} in a list of {len}"
        )));
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

/// Assign `display_order = index` to every id, in list order.
pub fn sequential_order(ids: &[DbId]) -> Vec<ReorderItem> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| ReorderItem {
            id: *id,
            display_order: index as i32,
        })
        .collect()
}

/// Apply one drag-and-drop gesture and return the renumbered list.
pub fn reorder_after_move(
    ids: &[DbId],
    from: usize,
    to: usize,
) -> Result<Vec<ReorderItem>, CoreError> {
    let mut ids = ids.to_vec();
    move_item(&mut ids, from, to)?;
    Ok(sequential_order(&ids))
}

/// Reject empty payloads, repeated ids and negative positions.
pub fn validate_reorder(items: &[ReorderItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(
            "Reorder request must contain at least one item".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.display_order < 0 {
            return Err(CoreError::Validation(format!(
                "displayOrder must not be negative (id {})",
                item.id
            )));
        }
        if !seen.insert(item.id) {
            return Err(CoreError::Validation(format!(
                "Duplicate id in reorder request: {}",
                item.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<DbId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn move_forward_shifts_intermediate_items_back() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        move_item(&mut list, 0, 2).unwrap();
        assert_eq!(list, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn move_backward_shifts_intermediate_items_forward() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        move_item(&mut list, 3, 1).unwrap();
        assert_eq!(list, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn move_to_same_index_is_noop() {
        let mut list = vec![1, 2, 3];
        move_item(&mut list, 1, 1).unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let mut list = vec![1, 2];
        assert_matches!(move_item(&mut list, 0, 2), Err(CoreError::Validation(_)));
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn reorder_after_move_renumbers_from_zero() {
        let list = ids(4);
        let result = reorder_after_move(&list, 3, 0).unwrap();

        let order: Vec<DbId> = result.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![list[3], list[0], list[1], list[2]]);

        let positions: Vec<i32> = result.iter().map(|r| r.display_order).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn validate_rejects_duplicates_and_negatives() {
        let id = Uuid::new_v4();
        let dup = [
            ReorderItem { id, display_order: 0 },
            ReorderItem { id, display_order: 1 },
        ];
        assert!(validate_reorder(&dup).is_err());

        let neg = [ReorderItem { id, display_order: -1 }];
        assert!(validate_reorder(&neg).is_err());

        assert!(validate_reorder(&[]).is_err());
        assert!(validate_reorder(&sequential_order(&ids(3))).is_ok());
    }

    #[test]
    fn reorder_item_uses_camel_case() {
        let item = ReorderItem {
            id: Uuid::nil(),
            display_order: 7,
        };
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["displayOrder"], 7);
    }
}
