use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::registry::MeterRegistry;
use super::writer::MetricsFileWriter;

/// Fixed-rate schedule for the metrics file writer.
#[derive(Debug, Clone)]
pub struct MetricsFileScheduler {
    pub interval: Duration,
}

impl Default for MetricsFileScheduler {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
        }
    }
}

/// Handle for a running scheduler thread.
#[derive(Debug)]
pub struct MetricsFileSchedulerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl MetricsFileSchedulerHandle {
    /// Stop the scheduler and wait for its thread. A write in progress finishes first.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

impl MetricsFileScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Spawn the scheduler on its own thread.
    ///
    /// - Writes once immediately, then every `interval` on a stable cadence
    /// - Write failures are handled inside the writer and never stop the loop
    /// - A zero `interval` is rejected with `InvalidInput`
    pub fn spawn<R>(&self, writer: Arc<MetricsFileWriter<R>>) -> std::io::Result<MetricsFileSchedulerHandle>
    where
        R: MeterRegistry + ?Sized,
    {
        if self.interval.is_zero() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "metrics file reporting interval must be positive",
            ));
        }

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let interval = self.interval;

        let join = thread::Builder::new()
            .name("metrics-file-scheduler".to_string())
            .spawn(move || scheduler_loop(interval, shutdown_rx, &writer))?;

        Ok(MetricsFileSchedulerHandle {
            shutdown: shutdown_tx,
            join: Some(join),
        })
    }
}

fn scheduler_loop<R>(interval: Duration, shutdown_rx: mpsc::Receiver<()>, writer: &MetricsFileWriter<R>)
where
    R: MeterRegistry + ?Sized,
{
    info!(path = %writer.path().display(), interval_ms = interval.as_millis() as u64, "metrics file scheduler started");

    let mut next_tick = Instant::now();

    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        match shutdown_rx.recv_timeout(wait) {
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        debug!("scheduled metrics file write triggered");
        writer.write_metrics_to_file();

        // Keep a stable cadence even if a write ran long.
        let now = Instant::now();
        while next_tick <= now {
            next_tick += interval;
        }
    }

    info!("metrics file scheduler stopped");
}
