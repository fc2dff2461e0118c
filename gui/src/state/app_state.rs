// Global application state for the GUI.
// Provided once at the root as a `Signal<AppState>`; components read and
// write it through `use_context::<Signal<AppState>>()`.

use chrono::Utc;
use shared::models::{AuctionItem, Sale};

use crate::config::AppConfig;

/// Dashboard tabs. Selection is local UI state, not a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Donors,
    Sales,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Donors, Tab::Sales, Tab::Reports];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Donors => "Donors",
            Tab::Sales => "Sales",
            Tab::Reports => "Reports",
        }
    }

    /// Looks a tab up by its config name, ignoring case.
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // Empty until a data layer feeds them.
    pub auction_items: Vec<AuctionItem>,
    pub sales: Vec<Sale>,

    /// `None` when the requested tab does not exist; the dashboard shows NotFound.
    pub active_tab: Option<Tab>,
    pub refreshed_at: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let active_tab = Tab::from_name(&config.app.initial_tab);
        if active_tab.is_none() {
            tracing::warn!("Unknown initial tab '{}' in configuration", config.app.initial_tab);
        }
        Self {
            auction_items: Vec::new(),
            sales: Vec::new(),
            active_tab,
            refreshed_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!("Switching dashboard tab to {}", tab.label());
        self.active_tab = Some(tab);
    }

    pub fn item_count(&self) -> usize {
        self.auction_items.len()
    }

    /// Sum of the starting bids that are set, or `None` when no item has one.
    pub fn total_starting_bid(&self) -> Option<f64> {
        self.auction_items
            .iter()
            .filter_map(|item| item.starting_bid)
            .fold(None, |total, bid| Some(total.unwrap_or(0.0) + bid))
    }
}
