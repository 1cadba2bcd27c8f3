//! Identifier types used throughout the Folio core.
//!
//! Ids are assigned by the remote API and treated as opaque strings. The
//! client never mints one itself.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Opaque identifier of a remotely persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps an id handed out by the remote API.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses an id, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Consumes the id, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Key of a sibling group.
///
/// Entities whose parent reference is missing or unknown all land in the
/// reserved [`GroupKey::Uncategorized`] bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    /// A known parent/category id.
    Keyed(EntityId),
    /// The sentinel bucket.
    Uncategorized,
}

impl GroupKey {
    /// Wire/display name of the sentinel bucket.
    pub const UNCATEGORIZED: &'static str = "uncategorized";

    /// Builds a keyed group from any id-like value.
    #[must_use]
    pub fn keyed(id: impl Into<EntityId>) -> Self {
        Self::Keyed(id.into())
    }

    /// Returns true for the sentinel bucket.
    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        matches!(self, Self::Uncategorized)
    }

    /// The parent id this key stands for, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<&EntityId> {
        match self {
            Self::Keyed(id) => Some(id),
            Self::Uncategorized => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyed(id) => write!(f, "{id}"),
            Self::Uncategorized => f.write_str(Self::UNCATEGORIZED),
        }
    }
}

impl FromStr for GroupKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::UNCATEGORIZED {
            return Ok(Self::Uncategorized);
        }
        Ok(Self::Keyed(EntityId::parse(s)?))
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GroupKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
