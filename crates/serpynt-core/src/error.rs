//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] serpynt_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] serpynt_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] serpynt_navigation::NavigationError),

    #[error("Settings dialog is not open")]
    DialogNotOpen,
}
