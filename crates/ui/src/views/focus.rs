use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use bloom_core::model::{FocusPhase, FocusSession, TickOutcome};

use crate::context::AppContext;
use crate::platform::{self, CompletionCueRef};
use crate::routes::Route;
use crate::vm::{FocusIntent, format_countdown, stage_art, stage_label};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn FocusView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let config = ctx.focus_config();

    let session = use_signal(move || FocusSession::new(config));
    let ticker = use_signal(|| None::<Task>);
    let cue: CompletionCueRef = use_hook(platform::default_cue);

    let dispatch_intent = {
        let cue = cue.clone();
        use_callback(move |intent: FocusIntent| {
            let mut session = session;
            let mut ticker = ticker;

            match intent {
                FocusIntent::Start => {
                    if !session.write().start() {
                        return;
                    }
                    let cue = cue.clone();
                    let task = spawn(async move {
                        loop {
                            tokio::time::sleep(Duration::from_secs(1)).await;
                            match session.write().tick() {
                                TickOutcome::Advanced => {}
                                TickOutcome::Completed => {
                                    cue.play();
                                    break;
                                }
                                // A stale ticker stops itself.
                                TickOutcome::Skipped => break,
                            }
                        }
                        ticker.set(None);
                    });
                    ticker.set(Some(task));
                }
                FocusIntent::Pause => {
                    session.write().pause();
                    if let Some(task) = ticker.write().take() {
                        task.cancel();
                    }
                }
                FocusIntent::Reset => {
                    session.write().reset();
                    if let Some(task) = ticker.write().take() {
                        task.cancel();
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FocusTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let session_read = session.read();
    let phase = session_read.phase();
    let stage = session_read.growth_stage();
    let countdown = format_countdown(session_read.remaining_secs());
    let progress_pct = (session_read.progress() * 100.0).round() as u32;
    let completed_count = session_read.completed_count();
    let start_label = if phase == FocusPhase::Paused {
        "Resume"
    } else {
        "Start"
    };

    rsx! {
        div { class: "page focus-page",
            header { class: "view-header",
                h2 { class: "view-title", "Focus" }
                p { class: "view-subtitle", "Stay on task and grow your plant." }
            }
            div { class: "view-divider" }

            div { class: "focus-card",
                div { class: "focus-plant",
                    span { class: "focus-plant-art", aria_hidden: "true", "{stage_art(stage)}" }
                    p { class: "focus-stage-label", "{stage_label(stage)}" }
                }
                p { class: "focus-countdown", "{countdown}" }
                div { class: "focus-progress",
                    div { class: "focus-progress-fill", style: "width: {progress_pct}%;" }
                }

                if phase == FocusPhase::Completed {
                    div { class: "focus-complete",
                        h3 { class: "focus-complete__title", "Session complete" }
                        p { class: "focus-complete__subtitle", "Your plant is in full bloom. Take a short break." }
                    }
                }

                div { class: "focus-actions",
                    if phase == FocusPhase::Running {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(FocusIntent::Pause),
                            "Pause"
                        }
                    } else if phase != FocusPhase::Completed {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(FocusIntent::Start),
                            "{start_label}"
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(FocusIntent::Reset),
                        "Reset"
                    }
                }

                p { class: "focus-tally", "Completed today: {completed_count}" }
            }

            button {
                class: "btn focus-back",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Overview {});
                },
                "Back to Overview"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FocusTestHandles {
    dispatch: Rc<RefCell<Option<Callback<FocusIntent>>>>,
    session: Rc<RefCell<Option<Signal<FocusSession>>>>,
}

#[cfg(test)]
impl FocusTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<FocusIntent>, session: Signal<FocusSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<FocusIntent> {
        (*self.dispatch.borrow()).expect("focus dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<FocusSession> {
        (*self.session.borrow()).expect("focus session registered")
    }
}
