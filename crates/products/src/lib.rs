//! Products domain module.
//!
//! Catalog product records and the default catalog the product store is
//! seeded with (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductChanges, default_catalog};
