use tracing::{debug, warn};

use restapi_core::{DomainError, DomainResult, EntityId};
use restapi_products::Product;
use restapi_sales::Order;

use crate::store::{EntityStore, InMemoryEntityStore};

use super::ProductRepository;

/// Order storage and order placement.
#[derive(Debug)]
pub struct OrderRepository<S = InMemoryEntityStore<Order>> {
    store: S,
}

impl OrderRepository {
    pub fn in_memory() -> Self {
        Self::new(InMemoryEntityStore::new("orders"))
    }
}

impl<S> OrderRepository<S>
where
    S: EntityStore<Order>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Place an order for the products behind `product_ids`.
    ///
    /// Unknown ids are dropped. Fails with `Validation` (and stores nothing)
    /// when none of the ids resolve.
    pub fn place<P>(&self, product_ids: &[EntityId], products: &ProductRepository<P>) -> DomainResult<Order>
    where
        P: EntityStore<Product>,
    {
        let resolved = products.resolve_all(product_ids);
        let dropped = product_ids.len() - resolved.len();
        if dropped > 0 {
            debug!(requested = product_ids.len(), dropped, "unknown product ids dropped from order");
        }

        if resolved.is_empty() {
            warn!(requested = product_ids.len(), "order rejected: no known products");
            return Err(DomainError::validation("order must contain at least one known product"));
        }

        Ok(self.store.save(Order::new(resolved)))
    }
}

super::delegate_entity_store!(OrderRepository, Order);
