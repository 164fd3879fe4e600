//! Entity store boundary.
//!
//! `EntityStore` is the storage-agnostic contract the repositories and HTTP
//! handlers work against; `InMemoryEntityStore` is the process-local backend.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryEntityStore;
pub use r#trait::EntityStore;
