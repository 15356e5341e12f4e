mod focus;
mod ids;
mod metric;
mod roster;
mod school;

pub use ids::{ParseIdError, SchoolId, UserId};

pub use focus::{
    DEFAULT_FOCUS_SECS, FocusConfig, FocusConfigError, FocusPhase, FocusSession, GrowthStage,
    TickOutcome,
};
pub use metric::{Metric, MetricError, MetricUnit};
pub use roster::{Member, MemberError, MemberStatus, Role};
pub use school::{School, SchoolError};
