use std::sync::Arc;

use restapi_core::{Entity, EntityId};

/// Ordered collection of one entity type with store-assigned ids.
///
/// Implementations keep insertion order and never fail: a missing entity is
/// reported as `None` or as an empty result, not as an error.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every stored entity, in insertion order.
    fn find_all(&self) -> Vec<E>;

    /// First entity whose id equals `id`.
    fn find_by_id(&self, id: EntityId) -> Option<E>;

    /// Entities matching `predicate`, in insertion order.
    fn filter(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E>;

    /// Insert-or-replace.
    ///
    /// - Unassigned id: the entity gets the next sequential id, is appended,
    ///   and the stored copy is returned.
    /// - Assigned id present in the store: that slot is replaced in place and
    ///   `entity` is returned.
    /// - Assigned id absent from the store: `entity` is returned unchanged
    ///   and the store is left untouched.
    fn save(&self, entity: E) -> E;

    /// Remove every entity with this id. Absent ids are a no-op.
    fn delete_by_id(&self, id: EntityId);

    /// Remove every entity. The id sequence keeps counting from where it was.
    fn delete_all(&self);

    fn len(&self) -> usize {
        self.find_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E, S> EntityStore<E> for Arc<S>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    fn find_all(&self) -> Vec<E> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: EntityId) -> Option<E> {
        (**self).find_by_id(id)
    }

    fn filter(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E> {
        (**self).filter(predicate)
    }

    fn save(&self, entity: E) -> E {
        (**self).save(entity)
    }

    fn delete_by_id(&self, id: EntityId) {
        (**self).delete_by_id(id)
    }

    fn delete_all(&self) {
        (**self).delete_all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
