//! Drag-reorder planning within one sibling group.
//!
//! The group passed in must already be in display order (see
//! [`crate::sorted`]): positions, not stored integers, are what a move
//! rearranges. After a move every member whose new position differs from
//! its stored order is reported, not just the dragged one.

use crate::ordering::{position, position_of, positions_changed, OrderChange};
use folio_model::Ordered;
use folio_types::EntityId;

/// The result of planning a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Reorder<T> {
    /// The group in its new order. Members listed in `changed` already
    /// carry their new order value.
    pub new_group: Vec<T>,
    /// Members whose stored order must be rewritten, in new-position order.
    pub changed: Vec<OrderChange>,
}

impl<T: Clone> Reorder<T> {
    fn unchanged(group: &[T]) -> Self {
        Self {
            new_group: group.to_vec(),
            changed: Vec::new(),
        }
    }
}

impl<T> Reorder<T> {
    /// Returns true if nothing has to be written.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }

    /// Ids of every member that has to be written.
    pub fn changed_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.changed.iter().map(|change| &change.id)
    }
}

/// Moves the member at `from` to position `to` (array-move semantics).
///
/// Members strictly between the two positions shift by one towards the
/// vacated slot. Equal or out-of-range positions are a no-op.
pub fn move_index<T: Ordered + Clone>(group: &[T], from: usize, to: usize) -> Reorder<T> {
    if from == to || from >= group.len() || to >= group.len() {
        return Reorder::unchanged(group);
    }

    let mut new_group = group.to_vec();
    let moved = new_group.remove(from);
    new_group.insert(to, moved);

    let changed = positions_changed(&new_group);
    for (index, item) in new_group.iter_mut().enumerate() {
        let new_order = position(index);
        if item.stored_order() != Some(new_order) {
            item.set_order(new_order);
        }
    }

    Reorder { new_group, changed }
}

/// Moves `active` onto the current position of `over`.
///
/// Both positions are resolved by id against `group` as it is now, so a
/// reload between gesture start and end cannot redirect the move. If either
/// id is missing, or both are the same, the group is returned unchanged.
pub fn reorder<T: Ordered + Clone>(group: &[T], active: &str, over: &str) -> Reorder<T> {
    if active == over {
        return Reorder::unchanged(group);
    }
    match (position_of(group, active), position_of(group, over)) {
        (Some(from), Some(to)) => move_index(group, from, to),
        _ => Reorder::unchanged(group),
    }
}
