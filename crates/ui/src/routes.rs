use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{FocusView, OverviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", OverviewView)] Overview {},
        #[route("/focus", FocusView)] Focus {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Bloom" }
            ul {
                li { Link { to: Route::Overview {}, "Overview" } }
                li { Link { to: Route::Focus {}, "Focus" } }
            }
        }
    }
}
