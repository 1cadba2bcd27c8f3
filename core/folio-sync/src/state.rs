//! Client-side collection state.
//!
//! Holds the items a board renders and the last list the remote returned.
//! Between an optimistic apply and the end of reconciliation the two differ;
//! a failed reconciliation falls back to a fresh load or, failing that, to
//! the authoritative snapshot.

use folio_model::Ordered;
use folio_order::OrderChange;
use folio_types::EntityId;

/// Items of one collection plus their authoritative snapshot.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    items: Vec<T>,
    authoritative: Vec<T>,
    version: u64,
    loaded: bool,
    optimistic: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            authoritative: Vec::new(),
            version: 0,
            loaded: false,
            optimistic: false,
        }
    }
}

impl<T: Ordered + Clone> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items as currently displayed, in storage order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The last list received from the remote.
    pub fn authoritative(&self) -> &[T] {
        &self.authoritative
    }

    /// Bumped on every change. Derived views built for an older version are stale.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether displayed items carry orders the remote has not confirmed.
    pub fn is_optimistic(&self) -> bool {
        self.optimistic
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replaces everything with a fresh remote list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.authoritative = items.clone();
        self.items = items;
        self.loaded = true;
        self.optimistic = false;
        self.version += 1;
    }

    /// Applies planned order changes ahead of persistence.
    ///
    /// Changes naming ids that are no longer present are skipped.
    pub fn apply(&mut self, changes: &[OrderChange]) {
        if changes.is_empty() {
            return;
        }
        for change in changes {
            if let Some(item) = self.items.iter_mut().find(|item| item.id() == &change.id) {
                item.set_order(change.new_order);
            }
        }
        self.optimistic = true;
        self.version += 1;
    }

    /// Marks optimistic orders as confirmed by the remote.
    pub fn confirm(&mut self) {
        if self.optimistic {
            self.authoritative = self.items.clone();
            self.optimistic = false;
        }
    }

    /// Discards optimistic changes and shows the authoritative snapshot again.
    pub fn restore(&mut self) {
        self.items = self.authoritative.clone();
        self.optimistic = false;
        self.version += 1;
    }
}
