//! SerPynt Navigation
//!
//! Toolbar actions and URL bar submissions, always aimed at the active tab:
//! - Back / Forward / Reload / Stop go straight to the engine view
//! - Home navigates to the homepage captured at startup
//! - URL bar text gets `http://` when it has no scheme, nothing more

mod action;
mod controller;
mod error;
mod input;

pub use action::NavAction;
pub use controller::NavigationController;
pub use error::NavigationError;
pub use input::normalize_input;

pub type Result<T> = std::result::Result<T, NavigationError>;
