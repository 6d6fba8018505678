//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab index {index} out of range (have {len} tabs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No tabs open")]
    NoTabs,

    #[error("Configured homepage is not a usable URL")]
    NoHomepage,

    #[error("Engine error: {0}")]
    Engine(String),
}
