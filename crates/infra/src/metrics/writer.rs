use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use super::registry::{MeterRegistry, MeterSnapshot};

const RULE: &str = "--------------------------------------------------------------------";

/// How many meter names are echoed to the log on each write.
const SAMPLE_METER_NAMES: usize = 5;

/// Appends human-readable metrics reports to a file.
pub struct MetricsFileWriter<R: ?Sized = dyn MeterRegistry> {
    registry: Arc<R>,
    path: PathBuf,
}

impl<R: MeterRegistry + ?Sized> MetricsFileWriter<R> {
    pub fn new(registry: Arc<R>, path: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot the registry and append one report block to the file.
    ///
    /// I/O failures are logged and swallowed; the next call simply tries again.
    pub fn write_metrics_to_file(&self) {
        let path = self.path.display();
        let meters = self.registry.meters();

        info!(path = %path, "writing metrics report");
        info!(meters = meters.len(), "meters in registry");
        if meters.is_empty() {
            warn!("meter registry is empty");
        } else {
            let sample: Vec<&str> = meters
                .iter()
                .take(SAMPLE_METER_NAMES)
                .map(|m| m.name.as_str())
                .collect();
            info!(?sample, "sample meter names");
        }

        let report = render_report(Local::now(), &meters);
        match append(&self.path, &report) {
            Ok(()) => info!(path = %path, "metrics report written"),
            Err(e) => error!(path = %path, error = %e, "failed to write metrics report"),
        }
    }
}

impl<R: ?Sized> core::fmt::Debug for MetricsFileWriter<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetricsFileWriter").field("path", &self.path).finish_non_exhaustive()
    }
}

fn append(path: &Path, report: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(report.as_bytes())?;
    file.flush()
}

/// Render one report block.
///
/// ```text
/// --------------------------------------------------------------------
/// Metrics Report - 2024-01-01 12:00:00.000 +0000
/// --------------------------------------------------------------------
/// Meter Name: http_server_requests_total
///   Tags: method=GET, status=200, 
///   Measurement: COUNT, Value: 3.0
///
/// --------------------------------------------------------------------
///
/// ```
pub fn render_report<Tz>(at: DateTime<Tz>, meters: &[MeterSnapshot]) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: core::fmt::Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Metrics Report - {}", at.format("%Y-%m-%d %H:%M:%S%.3f %z"));
    let _ = writeln!(out, "{RULE}");

    for meter in meters {
        let _ = writeln!(out, "Meter Name: {}", meter.name);
        if !meter.tags.is_empty() {
            out.push_str("  Tags: ");
            for (key, value) in &meter.tags {
                let _ = write!(out, "{key}={value}, ");
            }
            out.push('\n');
        }
        for m in &meter.measurements {
            let _ = writeln!(out, "  Measurement: {}, Value: {:?}", m.statistic, m.value);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{RULE}");
    out.push('\n');
    out
}
