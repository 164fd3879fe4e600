//! Periodic metrics file reporting.
//!
//! The writer pulls a snapshot from a [`MeterRegistry`] and appends a text
//! report to a file; the scheduler drives the writer from a dedicated thread.

pub mod registry;
pub mod scheduler;
pub mod writer;

pub use registry::{Measurement, MeterRegistry, MeterSnapshot, Statistic};
pub use scheduler::{MetricsFileScheduler, MetricsFileSchedulerHandle};
pub use writer::{MetricsFileWriter, render_report};
