// Reports tab (placeholder)
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn Reports() -> Element {
    rsx! {
        div {
            class: "tab-content reports",
            h2 { "Reports" }
            p { class: "placeholder-note", "Auction and donation reports will be available here." }
        }
    }
}
