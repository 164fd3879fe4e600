//! Entity trait: a record identified by a store-assigned [`EntityId`].

use crate::id::EntityId;

/// A record that can live in an entity store.
///
/// Entities are plain values; a store keeps its own copy and hands out clones.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Returns the entity identifier (`EntityId::UNASSIGNED` before the first save).
    fn id(&self) -> EntityId;

    /// Overwrites the identifier. Stores call this when inserting.
    fn set_id(&mut self, id: EntityId);

    /// Whether this entity has been assigned an id by a store.
    fn is_new(&self) -> bool {
        !self.id().is_assigned()
    }
}
