// Auction Desk GUI library: components, configuration and state for the
// desktop dashboard. The binary in main.rs only wires these up.
pub mod app;
pub mod components;
pub mod config;
pub mod state;

/// Stylesheet injected into the window head.
pub const STYLESHEET: &str = include_str!("../assets/main.css");
