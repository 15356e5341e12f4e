use services::OverviewSnapshot;

use crate::vm::metric_vm::{MetricBarVm, MetricCardVm, map_metric_bars, map_metric_cards};
use crate::vm::time_fmt::format_datetime;

/// Everything the overview header and metric sections render.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewVm {
    pub school_name: String,
    pub generated_at_str: String,
    pub metric_cards: Vec<MetricCardVm>,
    pub metric_bars: Vec<MetricBarVm>,
}

impl From<&OverviewSnapshot> for OverviewVm {
    fn from(snapshot: &OverviewSnapshot) -> Self {
        Self {
            school_name: snapshot.school.name().to_string(),
            generated_at_str: format_datetime(snapshot.generated_at),
            metric_cards: map_metric_cards(&snapshot.metrics),
            metric_bars: map_metric_bars(&snapshot.metrics),
        }
    }
}
