use prometheus::proto::{MetricFamily, MetricType};

/// Kind of value carried by a [`Measurement`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Statistic {
    Count,
    Total,
    Value,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Count => "COUNT",
            Statistic::Total => "TOTAL",
            Statistic::Value => "VALUE",
        }
    }
}

impl core::fmt::Display for Statistic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub statistic: Statistic,
    pub value: f64,
}

impl Measurement {
    pub fn new(statistic: Statistic, value: f64) -> Self {
        Self { statistic, value }
    }
}

/// Point-in-time reading of one meter (one labelled series).
#[derive(Debug, Clone, PartialEq)]
pub struct MeterSnapshot {
    pub name: String,
    pub tags: Vec<(String, String)>,
    pub measurements: Vec<Measurement>,
}

/// Source of meter readings for the metrics file writer.
pub trait MeterRegistry: Send + Sync + 'static {
    fn meters(&self) -> Vec<MeterSnapshot>;
}

impl<R> MeterRegistry for std::sync::Arc<R>
where
    R: MeterRegistry + ?Sized,
{
    fn meters(&self) -> Vec<MeterSnapshot> {
        (**self).meters()
    }
}

impl MeterRegistry for prometheus::Registry {
    fn meters(&self) -> Vec<MeterSnapshot> {
        snapshots_from_families(&self.gather())
    }
}

/// Flatten gathered Prometheus families into one snapshot per labelled series.
///
/// Counters report `COUNT`, gauges and untyped metrics `VALUE`, histograms
/// and summaries `COUNT` plus `TOTAL` (sample sum).
pub fn snapshots_from_families(families: &[MetricFamily]) -> Vec<MeterSnapshot> {
    let mut out = Vec::new();
    for family in families {
        for metric in family.get_metric() {
            let tags = metric
                .get_label()
                .iter()
                .map(|l| (l.get_name().to_string(), l.get_value().to_string()))
                .collect();

            let measurements = match family.get_field_type() {
                MetricType::COUNTER => {
                    vec![Measurement::new(Statistic::Count, metric.get_counter().get_value())]
                }
                MetricType::GAUGE => {
                    vec![Measurement::new(Statistic::Value, metric.get_gauge().get_value())]
                }
                MetricType::HISTOGRAM => {
                    let h = metric.get_histogram();
                    vec![
                        Measurement::new(Statistic::Count, h.get_sample_count() as f64),
                        Measurement::new(Statistic::Total, h.get_sample_sum()),
                    ]
                }
                MetricType::SUMMARY => {
                    let s = metric.get_summary();
                    vec![
                        Measurement::new(Statistic::Count, s.get_sample_count() as f64),
                        Measurement::new(Statistic::Total, s.get_sample_sum()),
                    ]
                }
                MetricType::UNTYPED => {
                    vec![Measurement::new(Statistic::Value, metric.get_untyped().get_value())]
                }
            };

            out.push(MeterSnapshot {
                name: family.get_name().to_string(),
                tags,
                measurements,
            });
        }
    }
    out
}
