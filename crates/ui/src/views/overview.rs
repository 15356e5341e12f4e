use dioxus::prelude::*;

use bloom_core::model::{MemberStatus, Role};
use services::RosterQuery;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{MemberRowVm, MetricBarVm, MetricCardVm, OverviewVm, map_member_rows};

const ROLE_FILTERS: [(&str, Option<Role>); 4] = [
    ("Everyone", None),
    ("Directors", Some(Role::Director)),
    ("Teachers", Some(Role::Teacher)),
    ("Students", Some(Role::Student)),
];

const STATUS_FILTERS: [(&str, Option<MemberStatus>); 4] = [
    ("Any status", None),
    ("Active", Some(MemberStatus::Active)),
    ("Invited", Some(MemberStatus::Invited)),
    ("Suspended", Some(MemberStatus::Suspended)),
];

#[component]
pub fn OverviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let school_id = ctx.school_id();
    let dashboard = ctx.dashboard();
    let roster = ctx.roster();

    let role_filter = use_signal(|| None::<Role>);
    let status_filter = use_signal(|| None::<MemberStatus>);

    let snapshot_resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let snapshot = dashboard
                .overview(school_id)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(OverviewVm::from(&snapshot))
        }
    });

    // Reading the filter signals here re-runs the query when a pill flips.
    let roster_resource = use_resource(move || {
        let roster = roster.clone();
        let mut query = RosterQuery::any();
        if let Some(role) = role_filter() {
            query = query.with_role(role);
        }
        if let Some(status) = status_filter() {
            query = query.with_status(status);
        }
        async move {
            let members = roster
                .members(school_id, query)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_member_rows(&members))
        }
    });

    let snapshot_state = view_state_from_resource(&snapshot_resource);
    let roster_state = view_state_from_resource(&roster_resource);

    let role_pills = ROLE_FILTERS.into_iter().map(|(label, value)| {
        let mut role_filter = role_filter;
        rsx! {
            button {
                class: if role_filter() == value {
                    "roster-filter roster-filter--active"
                } else {
                    "roster-filter"
                },
                r#type: "button",
                onclick: move |_| role_filter.set(value),
                "{label}"
            }
        }
    });
    let status_pills = STATUS_FILTERS.into_iter().map(|(label, value)| {
        let mut status_filter = status_filter;
        rsx! {
            button {
                class: if status_filter() == value {
                    "roster-filter roster-filter--active"
                } else {
                    "roster-filter"
                },
                r#type: "button",
                onclick: move |_| status_filter.set(value),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "page overview-page",
            header { class: "view-header",
                h2 { class: "view-title", "Overview" }
                p { class: "view-subtitle", "How the school is doing today." }
            }
            div { class: "view-divider" }

            match snapshot_state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = snapshot_resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "overview-school",
                        h3 { class: "overview-school-name", "{data.school_name}" }
                        p { class: "overview-updated", "Updated {data.generated_at_str}" }
                    }
                    div { class: "metric-grid",
                        for card in data.metric_cards {
                            MetricCard { card }
                        }
                    }
                    if !data.metric_bars.is_empty() {
                        div { class: "metric-chart",
                            h3 { class: "overview-section-title", "At a glance" }
                            for bar in data.metric_bars {
                                MetricBar { bar }
                            }
                        }
                    }
                },
            }

            div { class: "roster",
                h3 { class: "overview-section-title", "People" }
                div { class: "roster-filters",
                    div { class: "roster-filter-group", {role_pills} }
                    div { class: "roster-filter-group", {status_pills} }
                }

                match roster_state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = roster_resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    },
                    ViewState::Ready(rows) => rsx! {
                        if rows.is_empty() {
                            p { class: "roster-empty", "No one matches those filters." }
                        } else {
                            ul { class: "roster-list",
                                for row in rows {
                                    MemberRow { row }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn MetricCard(card: MetricCardVm) -> Element {
    rsx! {
        div { class: "metric-card",
            span { class: "metric-card-value", "{card.value_str}" }
            span { class: "metric-card-name", "{card.name}" }
        }
    }
}

#[component]
fn MetricBar(bar: MetricBarVm) -> Element {
    rsx! {
        div { class: "metric-bar-row",
            span { class: "metric-bar-name", "{bar.name}" }
            div { class: "metric-bar-track",
                div { class: "metric-bar-fill", style: "width: {bar.width_pct}%;" }
            }
            span { class: "metric-bar-value", "{bar.value_str}" }
        }
    }
}

#[component]
fn MemberRow(row: MemberRowVm) -> Element {
    rsx! {
        li { class: "roster-row",
            span { class: "roster-name", "{row.name}" }
            span { class: "roster-role", "{row.role_label}" }
            span { class: "{row.status_class}", "{row.status_label}" }
        }
    }
}
