//! Infrastructure layer: entity storage, repositories, metrics reporting.

pub mod metrics;
pub mod repositories;
pub mod store;

pub use repositories::{OrderRepository, ProductRepository, TutorialRepository};
pub use store::{EntityStore, InMemoryEntityStore};
