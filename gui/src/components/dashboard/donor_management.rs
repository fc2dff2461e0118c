// Donor management tab (placeholder)
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn DonorManagement() -> Element {
    rsx! {
        div {
            class: "tab-content donor-management",
            h2 { "Donor Management" }
            p { class: "placeholder-note", "Donor records and contact history will be managed here." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donor_management_title() {
        let html = dioxus_ssr::render_element(rsx! { DonorManagement {} });
        assert!(html.contains("Donor Management"));
    }
}
