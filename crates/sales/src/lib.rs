//! Sales orders domain module.
//!
//! An order owns copies of the products it was placed with (no IO, no HTTP,
//! no storage).

pub mod order;

pub use order::Order;
