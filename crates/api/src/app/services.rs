use restapi_infra::{OrderRepository, ProductRepository, TutorialRepository};

/// Repositories shared by all handlers.
#[derive(Debug)]
pub struct AppServices {
    pub tutorials: TutorialRepository,
    pub products: ProductRepository,
    pub orders: OrderRepository,
}

impl AppServices {
    /// Fresh in-memory stores; the product catalog starts seeded.
    pub fn in_memory() -> Self {
        Self {
            tutorials: TutorialRepository::in_memory(),
            products: ProductRepository::in_memory(),
            orders: OrderRepository::in_memory(),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::in_memory()
    }
}
