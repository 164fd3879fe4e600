//! Per-entity repositories layered over an [`EntityStore`].
//!
//! Each repository is itself an `EntityStore` (plain delegation) and adds the
//! derived reads and multi-step writes its entity needs.

use restapi_core::{DomainError, DomainResult, Entity, EntityId};

use crate::store::EntityStore;

/// Implements `EntityStore<$entity>` for a repository by forwarding to its `store` field.
macro_rules! delegate_entity_store {
    ($repo:ident, $entity:ty) => {
        impl<S> $crate::store::EntityStore<$entity> for $repo<S>
        where
            S: $crate::store::EntityStore<$entity>,
        {
            fn find_all(&self) -> Vec<$entity> {
                self.store.find_all()
            }

            fn find_by_id(&self, id: restapi_core::EntityId) -> Option<$entity> {
                self.store.find_by_id(id)
            }

            fn filter(&self, predicate: &dyn Fn(&$entity) -> bool) -> Vec<$entity> {
                self.store.filter(predicate)
            }

            fn save(&self, entity: $entity) -> $entity {
                self.store.save(entity)
            }

            fn delete_by_id(&self, id: restapi_core::EntityId) {
                self.store.delete_by_id(id)
            }

            fn delete_all(&self) {
                self.store.delete_all()
            }

            fn len(&self) -> usize {
                self.store.len()
            }
        }
    };
}

pub(crate) use delegate_entity_store;

pub mod orders;
pub mod products;
pub mod tutorials;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use tutorials::TutorialRepository;

/// Look `id` up, let `apply` edit a copy, and save the copy back.
///
/// The lookup and the save are two separate store operations: if the entity
/// is deleted in between, the save is a no-op and the edited copy is still
/// returned.
pub fn update_with<E, S>(store: &S, id: EntityId, apply: impl FnOnce(&mut E)) -> DomainResult<E>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    let mut entity = store.find_by_id(id).ok_or_else(DomainError::not_found)?;
    apply(&mut entity);
    Ok(store.save(entity))
}
