use std::sync::Arc;

use chrono::{DateTime, Utc};

use bloom_core::Clock;
use bloom_core::model::{Metric, School, SchoolId};

use crate::directory::SchoolDirectory;
use crate::error::DashboardError;

/// Everything the overview screen shows for one school.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings,
/// no localization assumptions. The UI decides how units and timestamps are
/// rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSnapshot {
    pub school: School,
    /// Metrics in presentation order, exactly as the directory returned them.
    pub metrics: Vec<Metric>,
    pub generated_at: DateTime<Utc>,
}

/// Presentation-facing dashboard facade that hides the directory and the
/// time source from the UI.
#[derive(Clone)]
pub struct DashboardService {
    clock: Clock,
    directory: Arc<dyn SchoolDirectory>,
}

impl DashboardService {
    #[must_use]
    pub fn new(clock: Clock, directory: Arc<dyn SchoolDirectory>) -> Self {
        Self { clock, directory }
    }

    /// Assemble the overview snapshot for a school.
    ///
    /// The aggregation is already computed upstream; this stamps it with
    /// the clock so the screen can show when it was put together.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Directory` when the school is unknown or
    /// the backend fails.
    pub async fn overview(&self, school_id: SchoolId) -> Result<OverviewSnapshot, DashboardError> {
        let school = self.directory.school(school_id).await?;
        let metrics = self.directory.metrics(school_id).await?;

        Ok(OverviewSnapshot {
            school,
            metrics,
            generated_at: self.clock.now(),
        })
    }
}
