// Display components wrapping the shared money and date formatters.
// They read the formatting settings from the `AppConfig` context when one is
// provided and fall back to the defaults otherwise.
#![allow(non_snake_case)]
use chrono::{Offset, Utc};
use dioxus::prelude::*;
use shared::utils::{format_currency_with, format_date_in};

use crate::config::AppConfig;

#[component]
pub fn MoneyText(#[props(!optional)] amount: Option<f64>) -> Element {
    let zero = try_use_context::<AppConfig>()
        .map(|config| config.currency.zero_amount)
        .unwrap_or_default();
    let text = format_currency_with(amount, zero);

    rsx! {
        span { class: "money", "{text}" }
    }
}

#[component]
pub fn DateText(value: String) -> Element {
    let zone = try_use_context::<AppConfig>()
        .map(|config| config.dates.display_offset())
        .unwrap_or_else(|| Utc.fix());
    let text = format_date_in(&value, &zone);

    rsx! {
        span { class: "date", title: "{value}", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::ZeroAmount;

    #[component]
    fn WithConfig(config: AppConfig, children: Element) -> Element {
        use_context_provider(|| config);
        rsx! { {children} }
    }

    fn absent_zero_config() -> AppConfig {
        let mut config = AppConfig::load_default().unwrap();
        config.currency.zero_amount = ZeroAmount::Absent;
        config.dates.utc_offset_minutes = -300;
        config
    }

    #[test]
    fn test_money_text_defaults() {
        let html = dioxus_ssr::render_element(rsx! { MoneyText { amount: Some(1234.5) } });
        assert!(html.contains("$1,234.50"));

        let html = dioxus_ssr::render_element(rsx! { MoneyText { amount: None } });
        assert!(html.contains("N/A"));

        let html = dioxus_ssr::render_element(rsx! { MoneyText { amount: Some(0.0) } });
        assert!(html.contains("$0.00"));
    }

    #[test]
    fn test_money_text_follows_zero_policy() {
        let html = dioxus_ssr::render_element(rsx! {
            WithConfig { config: absent_zero_config(),
                MoneyText { amount: Some(0.0) }
            }
        });
        assert!(html.contains("N/A"));
        assert!(!html.contains("$0.00"));
    }

    #[test]
    fn test_date_text() {
        let html = dioxus_ssr::render_element(rsx! { DateText { value: "2024-03-15T14:30:00Z" } });
        assert!(html.contains("Mar 15, 2:30 PM"));

        let html = dioxus_ssr::render_element(rsx! { DateText { value: "soon" } });
        assert!(html.contains("Invalid Date"));
    }

    #[test]
    fn test_date_text_uses_configured_offset() {
        let html = dioxus_ssr::render_element(rsx! {
            WithConfig { config: absent_zero_config(),
                DateText { value: "2024-03-15T14:30:00Z" }
            }
        });
        assert!(html.contains("Mar 15, 9:30 AM"));
    }
}
