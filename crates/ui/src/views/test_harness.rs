use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use bloom_core::model::{FocusConfig, School, SchoolId};
use bloom_core::time::fixed_clock;
use services::{DashboardService, MockDirectory, RosterService, SchoolDirectory};

use crate::context::{UiApp, build_app_context};
use crate::views::focus::FocusTestHandles;
use crate::views::{FocusView, OverviewView};

/// Short countdown so a test reaches completion in a handful of ticks.
pub const FOCUS_TEST_SECS: u32 = 5;

#[derive(Clone)]
struct TestApp {
    school_id: SchoolId,
    focus_config: FocusConfig,
    dashboard: Arc<DashboardService>,
    roster: Arc<RosterService>,
}

impl UiApp for TestApp {
    fn school_id(&self) -> SchoolId {
        self.school_id
    }

    fn focus_config(&self) -> FocusConfig {
        self.focus_config
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Overview,
    Focus,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    focus_handles: Option<FocusTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.focus_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Overview => rsx! { OverviewView {} },
        ViewKind::Focus => rsx! { FocusView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub focus_handles: Option<FocusTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let directory: Arc<dyn SchoolDirectory> =
        Arc::new(MockDirectory::seeded().expect("seeded directory"));
    setup_view_harness_with_directory(view, directory).await
}

pub async fn setup_view_harness_with_directory(
    view: ViewKind,
    directory: Arc<dyn SchoolDirectory>,
) -> ViewHarness {
    let school_id = directory
        .schools()
        .await
        .ok()
        .and_then(|schools| schools.first().map(School::id))
        .unwrap_or(SchoolId::new(1));
    let dashboard = Arc::new(DashboardService::new(fixed_clock(), Arc::clone(&directory)));
    let roster = Arc::new(RosterService::new(Arc::clone(&directory)));

    let focus_handles = match view {
        ViewKind::Focus => Some(FocusTestHandles::default()),
        ViewKind::Overview => None,
    };

    let app = Arc::new(TestApp {
        school_id,
        focus_config: FocusConfig::new(FOCUS_TEST_SECS).expect("nonzero test duration"),
        dashboard,
        roster,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            focus_handles: focus_handles.clone(),
        },
    );

    ViewHarness { dom, focus_handles }
}
