use restapi_core::{DomainResult, EntityId};
use restapi_products::{Product, ProductChanges, default_catalog};

use crate::store::{EntityStore, InMemoryEntityStore};

use super::update_with;

/// Product catalog storage.
#[derive(Debug)]
pub struct ProductRepository<S = InMemoryEntityStore<Product>> {
    store: S,
}

impl ProductRepository {
    /// A process-local catalog pre-populated with [`default_catalog`] (ids 1..=3).
    pub fn in_memory() -> Self {
        Self::new(InMemoryEntityStore::seeded("products", default_catalog()))
    }
}

impl<S> ProductRepository<S>
where
    S: EntityStore<Product>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&self, changes: ProductChanges) -> Product {
        self.store.save(Product::from(changes))
    }

    pub fn update(&self, id: EntityId, changes: ProductChanges) -> DomainResult<Product> {
        update_with(&self.store, id, |p: &mut Product| p.apply_changes(changes))
    }

    /// Resolve each id to a product snapshot, silently skipping unknown ids.
    ///
    /// Order and duplicates of `ids` are kept.
    pub fn resolve_all(&self, ids: &[EntityId]) -> Vec<Product> {
        ids.iter().filter_map(|id| self.store.find_by_id(*id)).collect()
    }
}

super::delegate_entity_store!(ProductRepository, Product);
