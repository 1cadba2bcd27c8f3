use folio_types::EntityId;
use serde::Serialize;

/// An entity that occupies a position inside a sibling group.
///
/// The stored order is a serialization of position, not an identity: two
/// siblings may carry the same value, and gaps are allowed. Ordering code
/// treats the position in a stably sorted group as the meaningful value.
pub trait Ordered {
    /// The remote id of this entity.
    fn id(&self) -> &EntityId;

    /// The group/parent this entity belongs to.
    ///
    /// Flat collections with no grouping return `None`, which places every
    /// member in the same sibling group.
    fn parent_key(&self) -> Option<&EntityId> {
        None
    }

    /// The order value as last persisted, if the entity ever had one.
    fn stored_order(&self) -> Option<u32>;

    /// Overwrites the order value locally.
    fn set_order(&mut self, order: u32);

    /// Effective order used for sorting. Missing values sort as 0.
    fn order(&self) -> u32 {
        self.stored_order().unwrap_or(0)
    }
}

/// An [`Ordered`] entity that can be written back to the remote API.
///
/// Updates use replace semantics, so [`Persisted::to_request`] must carry
/// the complete known field set, including an unchanged order.
pub trait Persisted: Ordered + Clone + Send + Sync + 'static {
    /// The create/update payload for this entity kind.
    type Request: Serialize + Clone + Send + Sync + 'static;

    /// Builds the full replace payload for this entity.
    fn to_request(&self) -> Self::Request;

    /// Builds an entity from a payload and a freshly assigned id.
    ///
    /// Only in-process collaborators call this; the console never invents
    /// ids for entities it sends to the real API.
    fn materialize(id: EntityId, request: Self::Request) -> Self;
}

/// Treats an empty reference (as sent by blank form selects) as absent.
pub(crate) fn non_empty(id: &Option<EntityId>) -> Option<&EntityId> {
    id.as_ref().filter(|id| !id.as_str().is_empty())
}
