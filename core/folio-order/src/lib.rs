//! Ordered hierarchical collection management for Folio.
//!
//! This crate holds the pure, synchronous core of the console:
//!
//! - [`group`]: partitions a flat collection into sibling groups by parent key
//! - [`Forest`]: assembles parent-referencing nodes into an ordered forest
//! - [`reorder`] / [`move_index`]: plan a drag move and the minimal set of
//!   order indices to write back
//!
//! Everything here is a pure function of its inputs. Derived structures
//! borrow from the source collection and are recomputed whenever it
//! changes; nothing is cached across calls.
//!
//! Sorting is stable throughout: siblings with equal order values keep
//! their input order.

mod error;
mod group;
mod ordering;
mod reorder;
mod tree;

pub use error::{StructuralError, StructuralResult};
pub use group::{group, Group, Groups};
pub use ordering::{
    is_contiguous, next_order, position_of, positions_changed, sort_by_order,
    sort_refs_by_order, sorted, OrderChange,
};
pub use reorder::{move_index, reorder, Reorder};
pub use tree::{Forest, Visit, MAX_DEPTH};
