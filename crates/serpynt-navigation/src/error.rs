//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Tab error: {0}")]
    Tab(#[from] serpynt_tabs::TabError),
}
