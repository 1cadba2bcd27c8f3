//! Shared test helpers for ordering tests.

#![allow(dead_code)]

use folio_model::Ordered;
use folio_types::EntityId;

/// Minimal ordered entity with an optional parent reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: EntityId,
    pub parent: Option<EntityId>,
    pub order: Option<u32>,
}

impl Ordered for Node {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn parent_key(&self) -> Option<&EntityId> {
        self.parent.as_ref()
    }

    fn stored_order(&self) -> Option<u32> {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

/// A root-level node with a stored order.
pub fn node(id: &str, order: u32) -> Node {
    Node {
        id: EntityId::new(id),
        parent: None,
        order: Some(order),
    }
}

/// A node under `parent` with a stored order.
pub fn child(id: &str, parent: &str, order: u32) -> Node {
    Node {
        id: EntityId::new(id),
        parent: Some(EntityId::new(parent)),
        order: Some(order),
    }
}

/// Ids of a slice of borrowed nodes, for compact assertions.
pub fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.to_string()).collect()
}

/// Ids of owned nodes.
pub fn owned_ids(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.to_string()).collect()
}

pub fn keys(raw: &[&str]) -> Vec<EntityId> {
    raw.iter().map(|k| EntityId::new(*k)).collect()
}
