pub mod graphql;
pub mod models;
pub mod utils;

// Models and formatting helpers are shared between the desktop dashboard and any
// future front-end (web build, reports export). No UI dependencies belong here.
