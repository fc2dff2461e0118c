// Dashboard shell: summary header, tab bar and the active tab panel
#![allow(non_snake_case)]
pub mod donor_management;
pub mod reports;
pub mod sales_grid;

use dioxus::prelude::*;

pub use donor_management::DonorManagement;
pub use reports::Reports;
pub use sales_grid::SalesGrid;

use crate::components::{DateText, MoneyText, NotFound};
use crate::state::app_state::{AppState, Tab};

#[component]
pub fn Dashboard(title: String) -> Element {
    let state = use_context::<Signal<AppState>>();

    let (active_tab, item_count, total_bid, refreshed_at, sales) = {
        let state = state.read();
        (
            state.active_tab,
            state.item_count(),
            state.total_starting_bid(),
            state.refreshed_at.clone(),
            state.sales.clone(),
        )
    };

    let panel = match active_tab {
        Some(Tab::Donors) => rsx! { DonorManagement {} },
        Some(Tab::Sales) => rsx! { SalesGrid { sales: sales } },
        Some(Tab::Reports) => rsx! { Reports {} },
        None => rsx! { NotFound {} },
    };

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "{title}" }
                div {
                    class: "dashboard-summary",
                    span { class: "item-count", "{item_count} items" }
                    span { "Starting bids: " MoneyText { amount: total_bid } }
                    span { "Last refreshed " DateText { value: refreshed_at } }
                }
            }
            nav {
                class: "tab-bar",
                for tab in Tab::ALL {
                    TabButton { key: "{tab.label()}", tab: tab, active: active_tab == Some(tab) }
                }
            }
            section { class: "tab-panel", {panel} }
        }
    }
}

#[component]
fn TabButton(tab: Tab, active: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let class = if active { "tab tab-active" } else { "tab" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| state.write().select_tab(tab),
            "{tab.label()}"
        }
    }
}
