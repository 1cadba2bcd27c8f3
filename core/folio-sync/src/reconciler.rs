//! Optimistic reorder reconciliation.
//!
//! A reorder runs in two phases. The plan is applied to the local state
//! first so the new order shows immediately. Then every changed entity is
//! written back concurrently, each write bounded by the write timeout. If
//! all writes succeed the optimistic state is confirmed. If any write fails,
//! the optimistic state is discarded in favour of a fresh `list()`; should
//! that reload fail too, the last authoritative snapshot is restored.
//!
//! Writes are never rolled back individually. The remote may end up with a
//! partially applied permutation, which the reload then shows as-is.

use crate::error::{ConsoleError, ConsoleResult};
use crate::remote::RemoteCollection;
use crate::state::CollectionState;
use folio_model::{Ordered, Persisted};
use folio_order::Reorder;
use folio_types::EntityId;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One order write the remote rejected or did not answer in time.
#[derive(Debug)]
pub struct WriteFailure {
    pub id: EntityId,
    pub error: ConsoleError,
}

/// How a reorder ended.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// Nothing moved; no writes were issued.
    Unchanged,
    /// Every changed entity was written.
    Saved { updated: usize },
    /// Some writes failed; the state now reflects a fresh load.
    Reloaded { failed: Vec<WriteFailure> },
    /// Some writes failed and so did the reload; the last authoritative
    /// snapshot is displayed.
    Restored {
        failed: Vec<WriteFailure>,
        reload_error: ConsoleError,
    },
}

impl ReconcileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Reloaded { .. } | Self::Restored { .. })
    }

    /// The rejected writes, empty on success.
    pub fn failed(&self) -> &[WriteFailure] {
        match self {
            Self::Reloaded { failed } | Self::Restored { failed, .. } => failed,
            Self::Unchanged | Self::Saved { .. } => &[],
        }
    }
}

/// Persists reorders of one remote collection.
pub struct OrderReconciler<T: Persisted> {
    remote: Arc<dyn RemoteCollection<T>>,
    write_timeout: Duration,
}

impl<T: Persisted> Clone for OrderReconciler<T> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            write_timeout: self.write_timeout,
        }
    }
}

impl<T: Persisted> OrderReconciler<T> {
    pub fn new(remote: Arc<dyn RemoteCollection<T>>, write_timeout: Duration) -> Self {
        Self {
            remote,
            write_timeout,
        }
    }

    pub fn remote(&self) -> &Arc<dyn RemoteCollection<T>> {
        &self.remote
    }

    /// Replaces the state with the remote's current list.
    ///
    /// On failure the state is left untouched.
    pub async fn load(&self, state: &mut CollectionState<T>) -> ConsoleResult<()> {
        let items = self.remote.list().await?;
        debug!(kind = self.remote.kind(), count = items.len(), "loaded collection");
        state.replace(items);
        Ok(())
    }

    /// Moves `active` to the position of `over` inside `group` and persists
    /// the resulting order changes.
    ///
    /// `group` is the sibling group as displayed, sorted by order. Ids are
    /// resolved against it at call time; a gesture naming an entity that is
    /// no longer in the group is a no-op.
    pub async fn reorder(
        &self,
        state: &mut CollectionState<T>,
        group: &[T],
        active: &str,
        over: &str,
    ) -> ReconcileOutcome {
        let plan = folio_order::reorder(group, active, over);
        if plan.is_noop() {
            debug!(kind = self.remote.kind(), active, over, "reorder is a no-op");
            return ReconcileOutcome::Unchanged;
        }

        debug!(
            kind = self.remote.kind(),
            active,
            over,
            changed = plan.changed.len(),
            "applying reorder"
        );
        state.apply(&plan.changed);

        let failed = self.persist(&plan).await;
        if failed.is_empty() {
            state.confirm();
            info!(
                kind = self.remote.kind(),
                updated = plan.changed.len(),
                "reorder saved"
            );
            return ReconcileOutcome::Saved {
                updated: plan.changed.len(),
            };
        }

        for failure in &failed {
            warn!(
                kind = self.remote.kind(),
                id = %failure.id,
                error = %failure.error,
                "order write failed"
            );
        }
        match self.load(state).await {
            Ok(()) => ReconcileOutcome::Reloaded { failed },
            Err(reload_error) => {
                warn!(
                    kind = self.remote.kind(),
                    error = %reload_error,
                    "reload after failed reorder failed; restoring last snapshot"
                );
                state.restore();
                ReconcileOutcome::Restored {
                    failed,
                    reload_error,
                }
            }
        }
    }

    /// Issues one update per changed entity, all at once.
    async fn persist(&self, plan: &Reorder<T>) -> Vec<WriteFailure> {
        let writes = plan
            .new_group
            .iter()
            .filter(|item| plan.changed_ids().any(|id| id == item.id()))
            .map(|item| {
                let id = item.id().clone();
                let request = item.to_request();
                async move {
                    let result =
                        match tokio::time::timeout(self.write_timeout, self.remote.update(&id, &request))
                            .await
                        {
                            Ok(result) => result.map(|_| ()),
                            Err(_) => Err(ConsoleError::Timeout),
                        };
                    (id, result)
                }
            });

        join_all(writes)
            .await
            .into_iter()
            .filter_map(|(id, result)| result.err().map(|error| WriteFailure { id, error }))
            .collect()
    }
}
