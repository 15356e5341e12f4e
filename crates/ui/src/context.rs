use std::sync::Arc;

use bloom_core::model::{FocusConfig, SchoolId};
use services::{DashboardService, RosterService};

pub trait UiApp: Send + Sync {
    fn school_id(&self) -> SchoolId;
    fn focus_config(&self) -> FocusConfig;

    fn dashboard(&self) -> Arc<DashboardService>;
    fn roster(&self) -> Arc<RosterService>;
}

#[derive(Clone)]
pub struct AppContext {
    school_id: SchoolId,
    focus_config: FocusConfig,

    dashboard: Arc<DashboardService>,
    roster: Arc<RosterService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            school_id: app.school_id(),
            focus_config: app.focus_config(),
            dashboard: app.dashboard(),
            roster: app.roster(),
        }
    }

    /// The school every view scopes its queries to.
    #[must_use]
    pub fn school_id(&self) -> SchoolId {
        self.school_id
    }

    #[must_use]
    pub fn focus_config(&self) -> FocusConfig {
        self.focus_config
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
