mod focus_vm;
mod member_vm;
mod metric_vm;
mod overview_vm;
mod time_fmt;

pub use focus_vm::{FocusIntent, format_countdown, stage_art, stage_label};
pub use member_vm::{MemberRowVm, map_member_rows};
pub use metric_vm::{MetricBarVm, MetricCardVm, map_metric_bars, map_metric_cards};
pub use overview_vm::OverviewVm;
