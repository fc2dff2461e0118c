#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

/// Root component. Expects the `AppConfig` as a root context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| Signal::new(AppState::new(&config)));
    let root_style = config.app.theme.palette().root_style();

    rsx! {
        div {
            class: "app",
            style: "{root_style}",
            Dashboard { title: config.app.title.clone() }
        }
    }
}
