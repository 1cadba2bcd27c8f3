//! Core type definitions for Folio.
//!
//! This crate defines the small set of types shared by every other crate:
//! - Opaque entity identifiers assigned by the remote API
//! - Sibling group keys, including the reserved `uncategorized` bucket

mod ids;

pub use ids::{EntityId, GroupKey};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("entity id must not be empty")]
    EmptyId,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
