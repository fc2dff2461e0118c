// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use gui::app::App;
use gui::config::AppConfig;
use gui::STYLESHEET;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Auction Desk (Dioxus Desktop)...");

    let app_config = match AppConfig::load_or_default() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}. Exiting.", e);
            return Err(e.into());
        }
    };

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
        )
        .with_custom_head(format!("<style>{}</style>", STYLESHEET));

    // The config is a root context so every component can read it with `use_context`.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Auction Desk finished.");
    Ok(())
}
