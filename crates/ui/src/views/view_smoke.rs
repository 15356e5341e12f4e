use std::sync::Arc;

use async_trait::async_trait;

use bloom_core::model::{Member, Metric, School, SchoolId};
use services::{DirectoryError, RosterQuery, SchoolDirectory};

use super::test_harness::{
    FOCUS_TEST_SECS, ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_directory,
};
use crate::vm::{FocusIntent, format_countdown};

#[tokio::test(flavor = "current_thread")]
async fn overview_view_smoke_renders_metric_cards() {
    let mut harness = setup_view_harness(ViewKind::Overview).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Northgate Primary"), "missing school in {html}");
    assert!(html.contains("Students Enrolled"), "missing metric in {html}");
    assert!(html.contains("412"), "missing count in {html}");
    assert!(html.contains("94.2%"), "missing percent in {html}");
    assert!(html.contains("19 min"), "missing minutes in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn overview_view_smoke_renders_roster_rank_ordered() {
    let mut harness = setup_view_harness(ViewKind::Overview).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Dana Whitfield"), "missing director in {html}");
    assert!(html.contains("Director"), "missing role label in {html}");
    let director = html.find("Dana Whitfield").expect("director rendered");
    let student = html.find("Avery Chen").expect("student rendered");
    assert!(director < student, "director listed after student in {html}");
}

struct FailingDirectory;

#[async_trait]
impl SchoolDirectory for FailingDirectory {
    async fn schools(&self) -> Result<Vec<School>, DirectoryError> {
        Err(DirectoryError::EmptySeed)
    }

    async fn school(&self, id: SchoolId) -> Result<School, DirectoryError> {
        Err(DirectoryError::UnknownSchool(id))
    }

    async fn metrics(&self, id: SchoolId) -> Result<Vec<Metric>, DirectoryError> {
        Err(DirectoryError::UnknownSchool(id))
    }

    async fn members(
        &self,
        id: SchoolId,
        _query: RosterQuery,
    ) -> Result<Vec<Member>, DirectoryError> {
        Err(DirectoryError::UnknownSchool(id))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn overview_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_directory(ViewKind::Overview, Arc::new(FailingDirectory)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn focus_view_smoke_renders_idle_countdown() {
    let mut harness = setup_view_harness(ViewKind::Focus).await;
    harness.rebuild();
    let html = harness.render();
    let full = format_countdown(FOCUS_TEST_SECS);
    assert!(html.contains(&full), "missing countdown in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(html.contains("Completed today: 0"), "missing tally in {html}");
    assert!(html.contains("Seed"), "missing stage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn focus_view_smoke_completes_after_final_tick() {
    let mut harness = setup_view_harness(ViewKind::Focus).await;
    harness.rebuild();
    let handles = harness.focus_handles.clone().expect("focus handles");

    harness.dom.in_runtime(|| {
        handles.dispatch().call(FocusIntent::Start);
        let mut session = handles.session();
        for _ in 0..FOCUS_TEST_SECS {
            let _ = session.write().tick();
        }
    });
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Session complete"), "missing banner in {html}");
    assert!(html.contains("Completed today: 1"), "missing tally in {html}");
    assert!(html.contains("In bloom"), "missing stage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn focus_view_smoke_pause_holds_remaining_time() {
    let mut harness = setup_view_harness(ViewKind::Focus).await;
    harness.rebuild();
    let handles = harness.focus_handles.clone().expect("focus handles");

    harness.dom.in_runtime(|| {
        handles.dispatch().call(FocusIntent::Start);
        let mut session = handles.session();
        let _ = session.write().tick();
        let _ = session.write().tick();
        handles.dispatch().call(FocusIntent::Pause);
    });
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("0:03"), "missing held countdown in {html}");
    assert!(html.contains("Resume"), "missing resume in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn focus_view_smoke_reset_clears_banner_but_keeps_tally() {
    let mut harness = setup_view_harness(ViewKind::Focus).await;
    harness.rebuild();
    let handles = harness.focus_handles.clone().expect("focus handles");

    harness.dom.in_runtime(|| {
        handles.dispatch().call(FocusIntent::Start);
        let mut session = handles.session();
        for _ in 0..FOCUS_TEST_SECS {
            let _ = session.write().tick();
        }
    });
    drive_dom(&mut harness.dom);

    harness.dom.in_runtime(|| {
        handles.dispatch().call(FocusIntent::Reset);
    });
    drive_dom(&mut harness.dom);

    let html = harness.render();
    let full = format_countdown(FOCUS_TEST_SECS);
    assert!(html.contains(&full), "missing countdown in {html}");
    assert!(!html.contains("Session complete"), "banner survived reset in {html}");
    assert!(html.contains("Completed today: 1"), "tally lost on reset in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
}
