//! Reorder planning for drag-and-drop sortable collections.
//!
//! Artworks, exhibitions, exhibition images, and media items each carry a
//! `display_order` column (ascending = earlier in presentation). A drag move
//! is planned here as a pure computation over the in-memory sequence; the
//! resulting write-set is applied row by row in `atelier-db`.

use crate::error::CoreError;
use crate::types::DbId;

/// Anything that participates in a user-sortable collection.
pub trait Ordered {
    fn id(&self) -> DbId;
    fn display_order(&self) -> i32;
}

/// One pending `display_order` write, keyed by row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderUpdate {
    pub id: DbId,
    pub display_order: i32,
}

/// Plan the writes for moving one item within an ordered sequence.
///
/// `items` must be the full sequence for one collection scope, ordered
/// ascending by current `display_order`. The move has array-splice
/// semantics: the item is removed first, then reinserted at `to_index` in
/// the already-shortened sequence, so items between the two positions shift
/// by exactly one.
///
/// Every item is assigned its 1-based position as the new order, but only
/// items whose stored order actually changes appear in the returned
/// write-set. `from_index == to_index` is a no-op and returns an empty set.
///
/// Returns [`CoreError::Validation`] if either index is out of range.
pub fn plan_move<T: Ordered>(
    items: &[T],
    from_index: usize,
    to_index: usize,
) -> Result<Vec<OrderUpdate>, CoreError> {
    let len = items.len();
    if from_index >= len {
        return Err(CoreError::Validation(format!(
            "from_index {from_index} out of range for collection of {len}"
        )));
    }
    if to_index >= len {
        return Err(CoreError::Validation(format!(
            "to_index {to_index} out of range for collection of {len}"
        )));
    }
    if from_index == to_index {
        return Ok(Vec::new());
    }

    let mut sequence: Vec<(DbId, i32)> = items
        .iter()
        .map(|item| (item.id(), item.display_order()))
        .collect();
    let moved = sequence.remove(from_index);
    sequence.insert(to_index, moved);

    let updates = sequence
        .iter()
        .enumerate()
        .filter_map(|(position, &(id, stored_order))| {
            let new_order = position as i32 + 1;
            (new_order != stored_order).then_some(OrderUpdate {
                id,
                display_order: new_order,
            })
        })
        .collect();

    Ok(updates)
}
