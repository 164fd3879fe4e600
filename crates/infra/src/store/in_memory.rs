use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use restapi_core::{Entity, EntityId};

use super::r#trait::EntityStore;

#[derive(Debug)]
struct StoreState<E> {
    entities: Vec<E>,
    last_id: EntityId,
}

/// In-memory entity store: a `Vec` in insertion order plus the last issued id.
///
/// One `RwLock` guards both, so every operation is atomic with respect to the
/// others. A poisoned lock is recovered; the vector is never left half-edited
/// by any operation here.
#[derive(Debug)]
pub struct InMemoryEntityStore<E> {
    name: &'static str,
    state: RwLock<StoreState<E>>,
}

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(StoreState {
                entities: Vec::new(),
                last_id: EntityId::UNASSIGNED,
            }),
        }
    }

    /// A store pre-populated with `seed`, each entity taking the next id in order.
    ///
    /// Seed entities are inserted regardless of the id they carry.
    pub fn seeded(name: &'static str, seed: impl IntoIterator<Item = E>) -> Self {
        let store = Self::new(name);
        {
            let mut state = store.write();
            for mut entity in seed {
                let id = state.last_id.next();
                entity.set_id(id);
                state.last_id = id;
                state.entities.push(entity);
            }
            debug!(store = name, seeded = state.entities.len(), "entity store seeded");
        }
        store
    }

    /// The most recently issued id (`UNASSIGNED` if none yet).
    pub fn last_issued_id(&self) -> EntityId {
        self.read().last_id
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState<E>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<E>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> EntityStore<E> for InMemoryEntityStore<E>
where
    E: Entity,
{
    fn find_all(&self) -> Vec<E> {
        self.read().entities.clone()
    }

    fn find_by_id(&self, id: EntityId) -> Option<E> {
        self.read().entities.iter().find(|e| e.id() == id).cloned()
    }

    fn filter(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E> {
        self.read()
            .entities
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    fn save(&self, mut entity: E) -> E {
        let mut state = self.write();

        if !entity.is_new() {
            let id = entity.id();
            match state.entities.iter_mut().find(|e| e.id() == id) {
                Some(slot) => {
                    *slot = entity.clone();
                    debug!(store = self.name, %id, "entity replaced");
                }
                None => debug!(store = self.name, %id, "save for unknown id ignored"),
            }
            return entity;
        }

        let id = state.last_id.next();
        state.last_id = id;
        entity.set_id(id);
        state.entities.push(entity.clone());
        debug!(store = self.name, %id, "entity inserted");
        entity
    }

    fn delete_by_id(&self, id: EntityId) {
        let mut state = self.write();
        let before = state.entities.len();
        state.entities.retain(|e| e.id() != id);
        debug!(store = self.name, %id, removed = before - state.entities.len(), "delete by id");
    }

    fn delete_all(&self) {
        let mut state = self.write();
        let removed = state.entities.len();
        state.entities.clear();
        debug!(store = self.name, removed, "delete all");
    }

    fn len(&self) -> usize {
        self.read().entities.len()
    }
}
