// Fallback page for anything the dashboard cannot show
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist. Pick a tab above to continue." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_renders_static_text() {
        let html = dioxus_ssr::render_element(rsx! { NotFound {} });
        assert!(html.contains("404"));
        assert!(html.contains("Page Not Found"));
    }
}
