//! Tauri IPC Commands
//!
//! These commands bridge the browser chrome to the Rust core. All of them
//! are async so the browser lock is only ever taken off the UI thread.

pub mod navigation;
pub mod settings;
pub mod tabs;
pub mod webview;

use serpynt_core::{Browser, Result, SessionSnapshot};
use tauri::{AppHandle, Manager};

use crate::state::AppState;
use tabs::CommandResult;

pub const MAIN_WINDOW_LABEL: &str = "main";

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}

/// Run `f` against the browser, then publish and return the new session
/// state.
pub(crate) fn apply<F>(app: &AppHandle, f: F) -> CommandResult<SessionSnapshot>
where
    F: FnOnce(&mut Browser) -> Result<()>,
{
    let Some(state) = app.try_state::<AppState>() else {
        return CommandResult::err("Browser state not found".to_string());
    };

    if let Err(e) = state.with_browser_mut(f) {
        return CommandResult::err(e.to_string());
    }

    let snapshot = state.snapshot();
    webview::publish(app, &snapshot);
    CommandResult::ok(snapshot)
}
