// GUI components module
pub mod dashboard;
pub mod form_input;
pub mod format;
pub mod not_found;

pub use dashboard::Dashboard;
pub use form_input::FormInput;
pub use format::{DateText, MoneyText};
pub use not_found::NotFound;
