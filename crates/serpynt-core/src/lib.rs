//! SerPynt Core
//!
//! Central coordination layer for the SerPynt browser shell. Owns the
//! settings store, the tab session and the settings dialog; the desktop app
//! only forwards UI events and engine callbacks into it.

mod browser;
mod config;
mod dialog;
mod error;

pub use browser::Browser;
pub use config::{
    Config, LaunchSettings, BLANK_PAGE, DEFAULT_PAGE, DEFAULT_USER_AGENT, KEY_DEFAULT_PAGE, KEY_USER_AGENT,
};
pub use dialog::{DialogState, SettingsDialog, SettingsForm, DIALOG_TITLE, RESTART_NOTICE};
pub use error::CoreError;

// Re-export core components
pub use serpynt_navigation::{normalize_input, NavAction, NavigationController, NavigationError};
pub use serpynt_storage::{ensure_user_data, SettingsStore, StorageError};
pub use serpynt_tabs::{
    EngineEvent, EngineEventKind, EngineView, SessionSnapshot, Tab, TabError, TabId, TabInfo,
    TabSession, ViewFactory, ViewSpec, BLANK_LABEL, WINDOW_TITLE_BASE,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
