use crate::error::ConsoleResult;
use crate::reconciler::{OrderReconciler, ReconcileOutcome};
use crate::remote::RemoteCollection;
use crate::state::CollectionState;
use folio_model::{Ordered, Persisted};
use folio_order::{next_order, sorted};
use folio_types::EntityId;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// One remote collection as a board holds it: local state plus the
/// reconciler that persists it.
pub struct ManagedCollection<T: Persisted> {
    state: CollectionState<T>,
    reconciler: OrderReconciler<T>,
}

impl<T: Persisted> ManagedCollection<T> {
    pub fn new(remote: Arc<dyn RemoteCollection<T>>, write_timeout: Duration) -> Self {
        Self {
            state: CollectionState::new(),
            reconciler: OrderReconciler::new(remote, write_timeout),
        }
    }

    pub fn kind(&self) -> &str {
        self.reconciler.remote().kind()
    }

    pub fn state(&self) -> &CollectionState<T> {
        &self.state
    }

    /// Items in storage order.
    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    /// Items sorted by order, ties in storage order.
    pub fn sorted(&self) -> Vec<T> {
        sorted(self.state.items())
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.state.get(id)
    }

    /// Order for a newly created member of this (ungrouped) collection.
    pub fn next_order(&self) -> u32 {
        next_order(self.state.items())
    }

    /// Edit payload for an existing member, keeping its stored order.
    pub fn edit(&self, id: &EntityId) -> Option<T::Request> {
        self.state.get(id).map(Persisted::to_request)
    }

    /// Reads the remote list without touching local state.
    pub async fn fetch(&self) -> ConsoleResult<Vec<T>> {
        self.reconciler.remote().list().await
    }

    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.reconciler.load(&mut self.state).await
    }

    /// Installs a list obtained by other means (e.g. embedded in a parent).
    pub fn replace(&mut self, items: Vec<T>) {
        self.state.replace(items);
    }

    /// Creates a new entity, or replaces `editing` when given.
    ///
    /// Local state is not touched; callers reload afterwards.
    pub async fn save(&self, editing: Option<&EntityId>, request: &T::Request) -> ConsoleResult<T> {
        let remote = self.reconciler.remote();
        let saved = match editing {
            Some(id) => remote.update(id, request).await?,
            None => remote.create(request).await?,
        };
        info!(kind = remote.kind(), id = %saved.id(), created = editing.is_none(), "saved");
        Ok(saved)
    }

    pub async fn delete(&self, id: &EntityId) -> ConsoleResult<()> {
        let remote = self.reconciler.remote();
        remote.delete(id).await?;
        info!(kind = remote.kind(), %id, "deleted");
        Ok(())
    }

    /// Reorders within `group`, a sibling group of this collection.
    pub async fn reorder(&mut self, group: &[T], active: &str, over: &str) -> ReconcileOutcome {
        self.reconciler
            .reorder(&mut self.state, group, active, over)
            .await
    }

    /// Reorders a collection that forms a single sibling group.
    pub async fn reorder_all(&mut self, active: &str, over: &str) -> ReconcileOutcome {
        let group = self.sorted();
        self.reorder(&group, active, over).await
    }
}
