//! Structural errors raised while walking parent references.

use folio_types::EntityId;
use thiserror::Error;

/// Result type for structural checks.
pub type StructuralResult<T> = Result<T, StructuralError>;

/// Inconsistencies in a parent-referencing collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A node's parent chain loops back on itself.
    #[error("parent references form a cycle through {id}")]
    Cycle { id: EntityId },

    /// A node references a parent that is not in the collection.
    #[error("node {id} references missing parent {parent}")]
    Dangling { id: EntityId, parent: EntityId },

    /// Traversal went deeper than the configured cap.
    #[error("tree deeper than {max} levels at {id}")]
    DepthExceeded { id: EntityId, max: usize },
}
