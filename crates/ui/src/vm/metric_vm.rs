use bloom_core::model::{Metric, MetricUnit};

/// Display-ready metric for the overview card grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCardVm {
    pub name: String,
    pub value_str: String,
}

impl From<&Metric> for MetricCardVm {
    fn from(metric: &Metric) -> Self {
        Self {
            name: metric.name().to_string(),
            value_str: format_metric_value(metric),
        }
    }
}

#[must_use]
pub fn map_metric_cards(metrics: &[Metric]) -> Vec<MetricCardVm> {
    metrics.iter().map(MetricCardVm::from).collect()
}

/// One bar of the at-a-glance chart.
///
/// Only count metrics are charted; widths are scaled against the largest
/// count in the snapshot so the longest bar always fills the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricBarVm {
    pub name: String,
    pub value_str: String,
    pub width_pct: u32,
}

#[must_use]
pub fn map_metric_bars(metrics: &[Metric]) -> Vec<MetricBarVm> {
    let counts: Vec<&Metric> = metrics
        .iter()
        .filter(|metric| metric.unit() == MetricUnit::Count)
        .collect();
    let max = counts
        .iter()
        .map(|metric| metric.value())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|metric| MetricBarVm {
            name: metric.name().to_string(),
            value_str: format_metric_value(metric),
            width_pct: ((metric.value().max(0.0) / max) * 100.0).round() as u32,
        })
        .collect()
}

fn format_metric_value(metric: &Metric) -> String {
    match metric.unit() {
        MetricUnit::Count => format!("{}", metric.value().round() as i64),
        MetricUnit::Percent => format!("{:.1}%", metric.value()),
        MetricUnit::Minutes => format!("{} min", metric.value().round() as i64),
    }
}
