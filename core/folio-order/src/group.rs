//! Sibling grouping by parent/category key.
//!
//! Every known key gets a bucket, even when empty, so that empty groups
//! still render. Entities whose key is missing or not among the known keys
//! share the reserved [`GroupKey::Uncategorized`] bucket, which always comes
//! last.

use crate::ordering::sort_refs_by_order;
use folio_model::Ordered;
use folio_types::{EntityId, GroupKey};
use std::collections::HashMap;

/// One sibling group: a key and its members sorted by order.
#[derive(Debug)]
pub struct Group<'a, T> {
    pub key: GroupKey,
    pub members: Vec<&'a T>,
}

impl<'a, T> Group<'a, T> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Owned copy of the members in group order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.members.iter().map(|m| (*m).clone()).collect()
    }
}

/// A derived partition of a flat collection into sibling groups.
///
/// Borrows from the source collection and is never persisted; recompute it
/// whenever the collection or the set of known keys changes.
#[derive(Debug)]
pub struct Groups<'a, T> {
    groups: Vec<Group<'a, T>>,
    index: HashMap<GroupKey, usize>,
}

impl<'a, T> Groups<'a, T> {
    /// The group for `key`, if it exists.
    pub fn get(&self, key: &GroupKey) -> Option<&Group<'a, T>> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    /// Members of the group for `key`. Unknown keys yield an empty slice.
    pub fn members(&self, key: &GroupKey) -> &[&'a T] {
        match self.get(key) {
            Some(group) => &group.members,
            None => &[],
        }
    }

    /// The sentinel bucket.
    pub fn uncategorized(&self) -> &[&'a T] {
        self.members(&GroupKey::Uncategorized)
    }

    /// Groups in key order, sentinel last.
    pub fn iter(&self) -> impl Iterator<Item = &Group<'a, T>> {
        self.groups.iter()
    }

    /// Number of groups, including the sentinel.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups. The sentinel bucket keeps this
    /// false for anything built by [`group`].
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped entities across all buckets.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Partitions `entities` into sibling groups keyed by `group_keys`.
///
/// Groups follow the order of `group_keys` (duplicates keep their first
/// position) with the sentinel bucket appended. Each bucket is sorted
/// ascending by order; ties keep input order.
pub fn group<'a, T: Ordered>(entities: &'a [T], group_keys: &[EntityId]) -> Groups<'a, T> {
    let mut groups: Vec<Group<'a, T>> = Vec::with_capacity(group_keys.len() + 1);
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(group_keys.len());

    for key in group_keys {
        if slots.contains_key(key.as_str()) {
            continue;
        }
        slots.insert(key.as_str(), groups.len());
        groups.push(Group {
            key: GroupKey::Keyed(key.clone()),
            members: Vec::new(),
        });
    }

    let sentinel = groups.len();
    groups.push(Group {
        key: GroupKey::Uncategorized,
        members: Vec::new(),
    });

    for entity in entities {
        let slot = entity
            .parent_key()
            .and_then(|parent| slots.get(parent.as_str()).copied())
            .unwrap_or(sentinel);
        groups[slot].members.push(entity);
    }

    for group in &mut groups {
        sort_refs_by_order(&mut group.members);
    }

    let index = groups
        .iter()
        .enumerate()
        .map(|(slot, group)| (group.key.clone(), slot))
        .collect();

    Groups { groups, index }
}
