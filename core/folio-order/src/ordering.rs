//! Ordering helpers shared by grouping, tree assembly and reordering.
//!
//! Ties between equal order values are broken by input position: every sort
//! in this crate is stable, which makes the weak order total.

use folio_model::Ordered;
use folio_types::EntityId;
use serde::{Deserialize, Serialize};

/// A single order index that has to be written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderChange {
    /// The entity whose position moved.
    pub id: EntityId,
    /// Its new position within the sibling group.
    pub new_order: u32,
}

impl OrderChange {
    /// Creates a new order change.
    #[must_use]
    pub fn new(id: EntityId, new_order: u32) -> Self {
        Self { id, new_order }
    }
}

/// Sorts owned entities ascending by order, keeping input order on ties.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

/// Sorts borrowed entities ascending by order, keeping input order on ties.
pub fn sort_refs_by_order<T: Ordered>(items: &mut [&T]) {
    items.sort_by_key(|item| item.order());
}

/// Returns a sorted copy of the given entities.
#[must_use]
pub fn sorted<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    sort_by_order(&mut out);
    out
}

/// Order to assign to a new entity appended to `siblings`.
#[must_use]
pub fn next_order<T>(siblings: &[T]) -> u32 {
    u32::try_from(siblings.len()).unwrap_or(u32::MAX)
}

/// Converts a position into an order value.
pub(crate) fn position(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Every member whose position in `group` differs from its stored order.
///
/// A member that never had an order stored always counts as changed.
#[must_use]
pub fn positions_changed<T: Ordered>(group: &[T]) -> Vec<OrderChange> {
    group
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let new_order = position(index);
            (item.stored_order() != Some(new_order))
                .then(|| OrderChange::new(item.id().clone(), new_order))
        })
        .collect()
}

/// Returns true if the stored orders are exactly `0..len` in sequence.
#[must_use]
pub fn is_contiguous<T: Ordered>(group: &[T]) -> bool {
    positions_changed(group).is_empty()
}

/// Position of the entity with the given id, if present.
#[must_use]
pub fn position_of<T: Ordered>(group: &[T], id: &str) -> Option<usize> {
    group.iter().position(|item| item.id().as_str() == id)
}
