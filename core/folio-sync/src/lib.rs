//! Remote persistence and optimistic reconciliation for the Folio console.
//!
//! The content API stores every collection with replace semantics and no
//! transactions. This crate keeps a local view of each collection in step
//! with it:
//!
//! - [`RemoteCollection`] / [`ProjectDirectory`]: the async contracts the
//!   console persists through
//! - [`HttpCollection`] / [`HttpProjectDirectory`]: reqwest implementations
//!   against the content API
//! - [`MemoryCollection`] / [`MemoryProjectDirectory`]: in-process
//!   collaborators with fault injection
//! - [`CollectionState`]: displayed items plus the last authoritative list
//! - [`OrderReconciler`]: applies a reorder optimistically, writes every
//!   changed order concurrently and reloads when any write fails
//! - [`boards`]: page state for skills, projects, certifications and careers
//!
//! # Example
//!
//! ```
//! use folio_model::Category;
//! use folio_sync::{ManagedCollection, MemoryCollection};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let remote = Arc::new(MemoryCollection::<Category>::new("category"));
//! let mut categories = ManagedCollection::new(remote, Duration::from_secs(5));
//! categories.load().await.unwrap();
//! assert!(categories.items().is_empty());
//! # });
//! ```

pub mod boards;
mod collection;
mod config;
mod error;
mod http;
mod memory;
mod reconciler;
mod remote;
mod state;

pub use boards::{
    CareerBoard, CareerKind, CertificationBoard, CredentialKind, ProjectBoard, ProjectCatalog,
    SkillBoard,
};
pub use collection::ManagedCollection;
pub use config::ApiConfig;
pub use error::{ConsoleError, ConsoleResult, ErrorBanner, Failure, FailureKind};
pub use http::{ApiClient, Endpoint, HttpCollection, HttpProjectDirectory};
pub use memory::{MemoryCollection, MemoryProjectDirectory};
pub use reconciler::{OrderReconciler, ReconcileOutcome, WriteFailure};
pub use remote::{ProjectContents, ProjectDirectory, RemoteCollection};
pub use state::CollectionState;
