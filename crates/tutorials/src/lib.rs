//! Tutorials domain module.
//!
//! Plain tutorial records (no IO, no HTTP, no storage).

pub mod tutorial;

pub use tutorial::{Tutorial, TutorialChanges};
