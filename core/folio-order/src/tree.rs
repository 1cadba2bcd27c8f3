//! Forest assembly for parent-referencing collections.
//!
//! Nodes without a parent are roots. Every other node is the child of the
//! node whose id equals its parent reference. Roots and each child list are
//! sorted ascending by order with input order breaking ties.
//!
//! A node whose parent is not in the collection is an orphan: it appears in
//! neither [`Forest::roots`] nor any [`Forest::children_of`] list, and is
//! reported through [`Forest::orphans`] instead. Children are indexed once
//! per assembly, so lookups are O(1) rather than a scan of the collection.

use crate::error::{StructuralError, StructuralResult};
use crate::ordering::sort_refs_by_order;
use folio_model::Ordered;
use std::collections::{HashMap, HashSet};

/// Traversal depth after which a walk is abandoned.
pub const MAX_DEPTH: usize = 256;

/// A node reached during a depth-first walk.
#[derive(Debug)]
pub struct Visit<'a, T> {
    pub node: &'a T,
    /// 0 for the node a walk started from.
    pub depth: usize,
}

impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

/// A derived forest over a flat node collection.
#[derive(Debug)]
pub struct Forest<'a, T> {
    nodes: HashMap<&'a str, &'a T>,
    roots: Vec<&'a T>,
    children: HashMap<&'a str, Vec<&'a T>>,
    orphans: Vec<&'a T>,
    source: &'a [T],
}

impl<'a, T: Ordered> Forest<'a, T> {
    /// Assembles the forest for `nodes`.
    pub fn assemble(nodes: &'a [T]) -> Self {
        let present: HashMap<&'a str, &'a T> =
            nodes.iter().map(|node| (node.id().as_str(), node)).collect();

        let mut roots = Vec::new();
        let mut children: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
        let mut orphans = Vec::new();

        for node in nodes {
            match node.parent_key() {
                None => roots.push(node),
                Some(parent) => match present.get_key_value(parent.as_str()) {
                    Some((&key, _)) => children.entry(key).or_default().push(node),
                    None => orphans.push(node),
                },
            }
        }

        sort_refs_by_order(&mut roots);
        for siblings in children.values_mut() {
            sort_refs_by_order(siblings);
        }

        Self {
            nodes: present,
            roots,
            children,
            orphans,
            source: nodes,
        }
    }

    /// Top-level nodes, sorted by order.
    pub fn roots(&self) -> &[&'a T] {
        &self.roots
    }

    /// Direct children of `id`, sorted by order.
    ///
    /// Unknown ids and leaves both yield an empty slice.
    pub fn children_of(&self, id: &str) -> &[&'a T] {
        match self.children.get(id) {
            Some(children) => children,
            None => &[],
        }
    }

    /// Nodes whose parent reference does not resolve.
    pub fn orphans(&self) -> &[&'a T] {
        &self.orphans
    }

    /// Looks up a node by id.
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.nodes.get(id).copied()
    }

    /// Number of nodes the forest was assembled from.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the forest was assembled from an empty collection.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Depth-first pre-order walk over every root and its descendants.
    ///
    /// Each node is followed by its whole subtree before its next sibling.
    pub fn preorder(&self) -> StructuralResult<Vec<Visit<'a, T>>> {
        let mut out = Vec::with_capacity(self.source.len());
        let mut seen = HashSet::with_capacity(self.source.len());
        for &root in &self.roots {
            self.walk_into(root, &mut seen, &mut out)?;
        }
        Ok(out)
    }

    /// Depth-first pre-order walk starting at `id`.
    ///
    /// Unknown ids yield an empty walk. A parent chain that loops back into
    /// the walk fails with [`StructuralError::Cycle`].
    pub fn walk_from(&self, id: &str) -> StructuralResult<Vec<Visit<'a, T>>> {
        let Some(start) = self.get(id) else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        self.walk_into(start, &mut HashSet::new(), &mut out)?;
        Ok(out)
    }

    /// Nodes that cannot be reached from any root: orphans, their subtrees,
    /// and nodes whose parent chain is a cycle. Input order is kept.
    pub fn unreachable(&self) -> Vec<&'a T> {
        let mut reached: HashSet<&str> = HashSet::with_capacity(self.source.len());
        let mut stack: Vec<&'a T> = self.roots.clone();
        while let Some(node) = stack.pop() {
            if reached.insert(node.id().as_str()) {
                stack.extend(self.children_of(node.id().as_str()));
            }
        }
        self.source
            .iter()
            .filter(|node| !reached.contains(node.id().as_str()))
            .collect()
    }

    /// Checks that every node hangs off a root.
    ///
    /// Reports the first dangling parent reference, then the first cycle.
    pub fn validate(&self) -> StructuralResult<()> {
        if let Some(orphan) = self.orphans.first() {
            if let Some(parent) = orphan.parent_key() {
                return Err(StructuralError::Dangling {
                    id: orphan.id().clone(),
                    parent: parent.clone(),
                });
            }
        }
        for node in self.unreachable() {
            if let Some(err) = self.cycle_through(node) {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Follows the parent chain of `node` and reports the first node it
    /// revisits.
    fn cycle_through(&self, node: &'a T) -> Option<StructuralError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = node;
        loop {
            if !seen.insert(current.id().as_str()) {
                return Some(StructuralError::Cycle {
                    id: current.id().clone(),
                });
            }
            let parent = current.parent_key()?;
            current = self.get(parent.as_str())?;
        }
    }

    fn walk_into(
        &self,
        start: &'a T,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<Visit<'a, T>>,
    ) -> StructuralResult<()> {
        let mut stack = vec![Visit {
            node: start,
            depth: 0,
        }];
        while let Some(visit) = stack.pop() {
            let id = visit.node.id();
            if !seen.insert(id.as_str()) {
                return Err(StructuralError::Cycle { id: id.clone() });
            }
            if visit.depth > MAX_DEPTH {
                return Err(StructuralError::DepthExceeded {
                    id: id.clone(),
                    max: MAX_DEPTH,
                });
            }
            out.push(visit);
            for &child in self.children_of(id.as_str()).iter().rev() {
                stack.push(Visit {
                    node: child,
                    depth: visit.depth + 1,
                });
            }
        }
        Ok(())
    }
}
